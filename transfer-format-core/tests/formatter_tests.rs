//! Integration tests for the transfer formatter
//!
//! Covers the observable contract of `format` and `format_net`: ordering,
//! grouping, sign handling, and the gross/net difference in zero handling.
//!
//! Run with: cargo test --test formatter_tests

use rust_decimal::Decimal;

use transfer_format_core::{Address, Error, TokenNames, Transfer, TransferFormatter, Wad};

// ============================================================================
// Test Helpers
// ============================================================================

const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
const MKR: &str = "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2";
const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

const US: &str = "0x00000000000000000000000000000000000000aa";
const THEM: &str = "0x00000000000000000000000000000000000000bb";
const OTHER: &str = "0x00000000000000000000000000000000000000cc";

fn addr(s: &str) -> Address {
    Address::parse(s).expect("valid test address")
}

fn transfer(token: &str, from: &str, to: &str, value: i64) -> Transfer<Decimal> {
    Transfer::new(addr(token), addr(from), addr(to), Decimal::new(value, 0))
}

fn token_names() -> TokenNames {
    [(DAI, "DAI"), (MKR, "MKR"), (WETH, "WETH")]
        .into_iter()
        .map(|(a, s)| (addr(a), s.to_string()))
        .collect()
}

/// All rotations of the input plus their reversals
fn permutations<A: Clone>(transfers: &[Transfer<A>]) -> Vec<Vec<Transfer<A>>> {
    let mut out = Vec::new();
    for shift in 0..transfers.len() {
        let mut rotated = transfers.to_vec();
        rotated.rotate_left(shift);
        out.push(rotated.clone());
        rotated.reverse();
        out.push(rotated);
    }
    out
}

// ============================================================================
// Gross Totals
// ============================================================================

#[test]
fn test_empty_input_gives_empty_string() {
    let names = token_names();
    let formatter = TransferFormatter::new();
    let none: Vec<Transfer<Decimal>> = Vec::new();

    assert_eq!(formatter.format(&none, |t| names.resolve(t)).unwrap(), "");
    assert_eq!(
        formatter.format_net(&none, &addr(US), |t| names.resolve(t)).unwrap(),
        ""
    );
}

#[test]
fn test_single_token_sums_all_values() {
    let names = token_names();
    let transfers = vec![
        transfer(DAI, US, THEM, 1),
        transfer(DAI, THEM, OTHER, 10),
        transfer(DAI, OTHER, US, 100),
    ];

    let out = TransferFormatter::new()
        .format(&transfers, |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, "111 DAI");
}

#[test]
fn test_multi_token_ascending_order() {
    let names = token_names();
    // DAI < MKR < WETH by address
    let transfers = vec![
        transfer(WETH, US, THEM, 3),
        transfer(DAI, US, THEM, 1),
        transfer(MKR, US, THEM, 2),
    ];

    let out = TransferFormatter::new()
        .format(&transfers, |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, "1 DAI and 2 MKR and 3 WETH");
}

#[test]
fn test_duplicates_are_counted() {
    let names = token_names();
    let t = transfer(MKR, US, THEM, 4);
    let transfers = vec![t.clone(), t];

    let out = TransferFormatter::new()
        .format(&transfers, |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, "8 MKR");
}

#[test]
fn test_gross_keeps_all_zero_token() {
    let names = token_names();
    let transfers = vec![transfer(DAI, US, THEM, 0), transfer(DAI, THEM, US, 0)];

    let out = TransferFormatter::new()
        .format(&transfers, |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, "0 DAI");
}

#[test]
fn test_unknown_token_shown_by_address() {
    let names = token_names();
    let unknown = "0x0000000000000000000000000000000000000001";
    let transfers = vec![transfer(unknown, US, THEM, 7)];

    let out = TransferFormatter::new()
        .format(&transfers, |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, format!("7 {}", unknown));
}

// ============================================================================
// Net Totals
// ============================================================================

#[test]
fn test_sign_rendering() {
    let names = token_names();
    let formatter = TransferFormatter::new();

    let outflow = vec![transfer(DAI, US, THEM, 5)];
    assert_eq!(
        formatter.format_net(&outflow, &addr(US), |t| names.resolve(t)).unwrap(),
        "-5 DAI"
    );

    let inflow = vec![transfer(DAI, THEM, US, 3)];
    assert_eq!(
        formatter.format_net(&inflow, &addr(US), |t| names.resolve(t)).unwrap(),
        "3 DAI"
    );
}

#[test]
fn test_gross_and_net_diverge_on_round_trip() {
    let names = token_names();
    let formatter = TransferFormatter::new();
    let transfers = vec![transfer(DAI, US, THEM, 5), transfer(DAI, THEM, US, 5)];

    assert_eq!(
        formatter.format(&transfers, |t| names.resolve(t)).unwrap(),
        "10 DAI"
    );
    assert_eq!(
        formatter.format_net(&transfers, &addr(US), |t| names.resolve(t)).unwrap(),
        ""
    );
}

#[test]
fn test_self_transfer_contributes_nothing() {
    let names = token_names();
    let formatter = TransferFormatter::new();
    let transfers = vec![transfer(DAI, US, US, 1_000), transfer(DAI, THEM, US, 2)];

    assert_eq!(
        formatter.format_net(&transfers, &addr(US), |t| names.resolve(t)).unwrap(),
        "2 DAI"
    );
}

#[test]
fn test_irrelevant_transfer_counts_only_toward_gross() {
    let names = token_names();
    let formatter = TransferFormatter::new();
    let transfers = vec![transfer(MKR, THEM, OTHER, 9), transfer(MKR, US, THEM, 1)];

    assert_eq!(
        formatter.format(&transfers, |t| names.resolve(t)).unwrap(),
        "10 MKR"
    );
    assert_eq!(
        formatter.format_net(&transfers, &addr(US), |t| names.resolve(t)).unwrap(),
        "-1 MKR"
    );
}

#[test]
fn test_net_mixes_kept_and_suppressed_tokens() {
    let names = token_names();
    let transfers = vec![
        transfer(WETH, THEM, US, 2),
        transfer(MKR, US, THEM, 4),
        transfer(MKR, THEM, US, 4),
        transfer(DAI, US, THEM, 6),
        transfer(DAI, THEM, US, 1),
    ];

    let out = TransferFormatter::new()
        .format_net(&transfers, &addr(US), |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, "-5 DAI and 2 WETH");
}

// ============================================================================
// Order Independence
// ============================================================================

#[test]
fn test_permutations_give_identical_output() {
    let names = token_names();
    let formatter = TransferFormatter::new();
    let transfers = vec![
        transfer(WETH, THEM, US, 2),
        transfer(DAI, US, THEM, 6),
        transfer(MKR, OTHER, THEM, 3),
        transfer(DAI, THEM, US, 1),
        transfer(MKR, US, US, 8),
    ];

    let gross = formatter.format(&transfers, |t| names.resolve(t)).unwrap();
    let net = formatter
        .format_net(&transfers, &addr(US), |t| names.resolve(t))
        .unwrap();
    assert_eq!(gross, "7 DAI and 11 MKR and 2 WETH");
    assert_eq!(net, "-5 DAI and 2 WETH");

    for permuted in permutations(&transfers) {
        assert_eq!(formatter.format(&permuted, |t| names.resolve(t)).unwrap(), gross);
        assert_eq!(
            formatter
                .format_net(&permuted, &addr(US), |t| names.resolve(t))
                .unwrap(),
            net
        );
    }
}

#[test]
fn test_permutations_agree_near_amount_limit() {
    let names = token_names();
    let formatter = TransferFormatter::new();
    let max = Wad::from_raw(i128::MAX);
    let one = Wad::from_raw(1);
    let transfers = vec![
        Transfer::new(addr(DAI), addr(THEM), addr(US), max),
        Transfer::new(addr(DAI), addr(US), addr(THEM), one),
        Transfer::new(addr(DAI), addr(THEM), addr(US), one),
    ];

    for permuted in permutations(&transfers) {
        assert_eq!(
            formatter
                .format_net(&permuted, &addr(US), |t| names.resolve(t))
                .unwrap(),
            "170141183460469231731.687303715884105727 DAI"
        );
        // the gross total really is out of range, in every order
        assert!(matches!(
            formatter.format(&permuted, |t| names.resolve(t)),
            Err(Error::AmountOverflow { .. })
        ));
    }
}

// ============================================================================
// Wad Amounts
// ============================================================================

#[test]
fn test_wad_amounts_render_with_full_precision() {
    let names = token_names();
    let transfers = vec![
        Transfer::new(addr(DAI), addr(US), addr(THEM), Wad::parse("1.5").unwrap()),
        Transfer::new(addr(DAI), addr(US), addr(THEM), Wad::parse("0.25").unwrap()),
        Transfer::new(addr(WETH), addr(THEM), addr(US), Wad::parse("0.1").unwrap()),
    ];
    let formatter = TransferFormatter::new();

    assert_eq!(
        formatter.format(&transfers, |t| names.resolve(t)).unwrap(),
        "1.750000000000000000 DAI and 0.100000000000000000 WETH"
    );
    assert_eq!(
        formatter
            .format_net(&transfers, &addr(US), |t| names.resolve(t))
            .unwrap(),
        "-1.750000000000000000 DAI and 0.100000000000000000 WETH"
    );
}

#[test]
fn test_checksum_cased_addresses_group_together() {
    let names = token_names();
    let transfers = vec![
        Transfer::new(
            addr("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            addr(US),
            addr(THEM),
            Wad::from_whole(1),
        ),
        Transfer::new(addr(DAI), addr(US), addr(THEM), Wad::from_whole(2)),
    ];

    let out = TransferFormatter::new()
        .format(&transfers, |t| names.resolve(t))
        .unwrap();
    assert_eq!(out, "3.000000000000000000 DAI");
}
