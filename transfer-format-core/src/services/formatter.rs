//! Transfer formatter - per-token totals rendered as a sentence
//!
//! Transfers are grouped by token address, totalled, and rendered as
//! `"<total> <name>"` segments joined with `" and "`, ascending by token
//! address. Gross mode keeps every token seen, including zero totals. Net mode
//! signs each transfer relative to an observer address and drops tokens whose
//! net total is zero.

use std::collections::BTreeMap;
use std::convert::Infallible;

use serde::Serialize;
use tracing::debug;

use crate::domain::result::{Error, FormatError, Result};
use crate::domain::{Address, Amount, Transfer};

const SEGMENT_SEPARATOR: &str = " and ";

/// Total of one token across a set of transfers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenTotal<A> {
    pub token: Address,
    pub total: A,
}

/// Formats token transfers as gross or net per-token totals
///
/// Holds no state; a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferFormatter;

impl TransferFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Gross total of every token present, ascending by token address
    pub fn summarize<'a, A, I>(&self, transfers: I) -> Result<Vec<TokenTotal<A>>>
    where
        A: Amount + 'a,
        I: IntoIterator<Item = &'a Transfer<A>>,
    {
        let totals = total_by_token(transfers, |transfer| Some(transfer.value.clone()))?;
        Ok(totals
            .into_iter()
            .map(|(token, total)| TokenTotal { token, total })
            .collect())
    }

    /// Net change in the holdings of `our_address`, ascending by token
    /// address. Tokens that net to zero are left out.
    pub fn summarize_net<'a, A, I>(
        &self,
        transfers: I,
        our_address: &Address,
    ) -> Result<Vec<TokenTotal<A>>>
    where
        A: Amount + 'a,
        I: IntoIterator<Item = &'a Transfer<A>>,
    {
        let totals = total_by_token(transfers, |transfer| transfer.net_value(our_address))?;
        let seen = totals.len();
        let net: Vec<TokenTotal<A>> = totals
            .into_iter()
            .filter(|(_, total)| !total.is_zero())
            .map(|(token, total)| TokenTotal { token, total })
            .collect();

        debug!(tokens = seen, suppressed = seen - net.len(), "Netted transfers");
        Ok(net)
    }

    /// Render gross per-token totals, e.g. `"1.5 DAI and 2 WETH"`.
    ///
    /// `token_name` is called once for every distinct token. Returns an empty
    /// string when there are no transfers.
    pub fn format<'a, A, I, F>(&self, transfers: I, mut token_name: F) -> Result<String>
    where
        A: Amount + 'a,
        I: IntoIterator<Item = &'a Transfer<A>>,
        F: FnMut(&Address) -> String,
    {
        self.try_format(transfers, |token| Ok::<_, Infallible>(token_name(token)))
            .map_err(into_core_error)
    }

    /// Render the net effect on `our_address`, e.g. `"-5 DAI and 3 MKR"`.
    ///
    /// `token_name` is called only for tokens with a non-zero net total.
    /// Returns an empty string when nothing changed hands.
    pub fn format_net<'a, A, I, F>(
        &self,
        transfers: I,
        our_address: &Address,
        mut token_name: F,
    ) -> Result<String>
    where
        A: Amount + 'a,
        I: IntoIterator<Item = &'a Transfer<A>>,
        F: FnMut(&Address) -> String,
    {
        self.try_format_net(transfers, our_address, |token| {
            Ok::<_, Infallible>(token_name(token))
        })
        .map_err(into_core_error)
    }

    /// Like [`format`](Self::format) with a fallible name resolver.
    ///
    /// The first resolver error aborts the call and is returned unchanged.
    pub fn try_format<'a, A, I, F, E>(
        &self,
        transfers: I,
        token_name: F,
    ) -> std::result::Result<String, FormatError<E>>
    where
        A: Amount + 'a,
        I: IntoIterator<Item = &'a Transfer<A>>,
        F: FnMut(&Address) -> std::result::Result<String, E>,
    {
        let totals = self.summarize(transfers)?;
        self.try_render(&totals, token_name)
            .map_err(FormatError::Resolve)
    }

    /// Like [`format_net`](Self::format_net) with a fallible name resolver.
    pub fn try_format_net<'a, A, I, F, E>(
        &self,
        transfers: I,
        our_address: &Address,
        token_name: F,
    ) -> std::result::Result<String, FormatError<E>>
    where
        A: Amount + 'a,
        I: IntoIterator<Item = &'a Transfer<A>>,
        F: FnMut(&Address) -> std::result::Result<String, E>,
    {
        let totals = self.summarize_net(transfers, our_address)?;
        self.try_render(&totals, token_name)
            .map_err(FormatError::Resolve)
    }

    /// Join already computed totals into the summary sentence
    pub fn render<A, F>(&self, totals: &[TokenTotal<A>], mut token_name: F) -> String
    where
        A: Amount,
        F: FnMut(&Address) -> String,
    {
        match self.try_render(totals, |token| Ok::<_, Infallible>(token_name(token))) {
            Ok(sentence) => sentence,
            Err(never) => match never {},
        }
    }

    /// Like [`render`](Self::render) with a fallible name resolver.
    ///
    /// Stops at the first resolver error and returns it.
    pub fn try_render<A, F, E>(
        &self,
        totals: &[TokenTotal<A>],
        mut token_name: F,
    ) -> std::result::Result<String, E>
    where
        A: Amount,
        F: FnMut(&Address) -> std::result::Result<String, E>,
    {
        let segments = totals
            .iter()
            .map(|t| {
                let name = token_name(&t.token)?;
                Ok(format!("{} {}", t.total, name))
            })
            .collect::<std::result::Result<Vec<_>, E>>()?;

        Ok(segments.join(SEGMENT_SEPARATOR))
    }
}

/// Signed contributions to one token's total.
///
/// Credits and debits are summed alternately so every partial sum lies
/// between the most negative and most positive values involved. The sum
/// overflows only when the final total is unrepresentable, whatever the
/// input order.
struct Ledger<A> {
    credits: Vec<A>,
    debits: Vec<A>,
}

impl<A: Amount> Ledger<A> {
    fn new() -> Self {
        Self {
            credits: Vec::new(),
            debits: Vec::new(),
        }
    }

    fn record(&mut self, value: A) {
        if value.is_negative() {
            self.debits.push(value);
        } else {
            self.credits.push(value);
        }
    }

    fn total(self) -> Option<A> {
        let mut credits = self.credits.into_iter();
        let mut debits = self.debits.into_iter();
        let mut total = A::zero();

        loop {
            let next = if total.is_negative() {
                credits.next().or_else(|| debits.next())
            } else {
                debits.next().or_else(|| credits.next())
            };
            match next {
                Some(value) => total = total.checked_add(&value)?,
                None => return Some(total),
            }
        }
    }
}

/// Collect each transfer's contribution under its token, then total per token
fn total_by_token<'a, A, I, C>(transfers: I, contribution: C) -> Result<BTreeMap<Address, A>>
where
    A: Amount + 'a,
    I: IntoIterator<Item = &'a Transfer<A>>,
    C: Fn(&Transfer<A>) -> Option<A>,
{
    let mut ledgers: BTreeMap<Address, Ledger<A>> = BTreeMap::new();
    let mut count = 0usize;

    for transfer in transfers {
        count += 1;
        let value = contribution(transfer).ok_or_else(|| Error::AmountOverflow {
            token: transfer.token_address.clone(),
        })?;
        ledgers
            .entry(transfer.token_address.clone())
            .or_insert_with(Ledger::new)
            .record(value);
    }

    let totals = ledgers
        .into_iter()
        .map(|(token, ledger)| match ledger.total() {
            Some(total) => Ok((token, total)),
            None => Err(Error::AmountOverflow { token }),
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    debug!(transfers = count, tokens = totals.len(), "Totalled transfers by token");
    Ok(totals)
}

fn into_core_error(err: FormatError<Infallible>) -> Error {
    match err {
        FormatError::Core(e) => e,
        FormatError::Resolve(never) => match never {},
    }
}
