//! Field formatting pipeline - raw source payloads to display-ready entities

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::Rng;

use super::entity::User;
use crate::domain::error::DomainError;
use crate::domain::source::RawUser;

/// Format one raw record against today's date.
pub fn format_user_now(raw: &RawUser) -> Result<User, DomainError> {
    format_user(raw, Utc::now().date_naive())
}

/// Format one raw record into a [`User`].
///
/// Name fields and the uid pass through verbatim; `age` is derived from
/// `date_of_birth` and `today`; `salary` is synthesized fresh on every call
/// and is never derived from the input.
pub fn format_user(raw: &RawUser, today: NaiveDate) -> Result<User, DomainError> {
    let birthdate = parse_birthdate(&raw.date_of_birth)?;

    Ok(User::new(
        &raw.uid,
        &raw.first_name,
        &raw.last_name,
        &raw.username,
        years_between(birthdate, today),
        synthesize_salary(),
    ))
}

/// Format a batch of raw records in document order.
pub fn format_batch(raws: &[RawUser], today: NaiveDate) -> Result<Vec<User>, DomainError> {
    raws.iter().map(|raw| format_user(raw, today)).collect()
}

fn parse_birthdate(value: &str) -> Result<NaiveDate, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|e| DomainError::formatting(format!("Unparseable date_of_birth '{value}': {e}")))
}

/// Whole calendar years elapsed from `birth` to `now`.
///
/// Ties within the same month are broken by comparing day-of-week
/// (Sunday = 0), not day-of-month. The original roster computed ages this
/// way; the behavior is kept, so two dates in the same month can be ordered
/// differently than their day numbers suggest.
fn years_between(birth: NaiveDate, now: NaiveDate) -> u32 {
    if now.year() <= birth.year() {
        return 0;
    }

    let elapsed = (now.year() - birth.year()) as u32;

    if now.month0() < birth.month0() {
        return elapsed - 1;
    }
    if now.month0() == birth.month0()
        && now.weekday().num_days_from_sunday() < birth.weekday().num_days_from_sunday()
    {
        return elapsed - 1;
    }
    elapsed
}

/// Random display salary in `[0, 10000)`, formatted as `"R$ <integer>,00"`.
fn synthesize_salary() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("R$ {value},00")
}
