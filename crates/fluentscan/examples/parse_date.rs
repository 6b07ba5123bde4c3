//! Pulls the fields out of a `date`-style timestamp with quantified
//! character classes and the scan-ahead `until` operator.
//!
//! Run with
//!
//! ```bash
//! cargo run -p fluentscan --example parse_date
//! ```

use fluentscan::Scanner;

fn main() {
    let scan = Scanner::new("Thu Jan 14 16:23:24 HKT 2016")
        .one_or_many()
        .letter()
        .bind_var("day_of_week")
        .then(" ")
        .one_or_many()
        .letter()
        .bind_var("month")
        .then(" ")
        .one_or_many()
        .digit()
        .bind_var("day_of_month")
        .then(" ")
        .until(" ")
        .bind_var("time")
        .then(" ")
        .until(" ")
        .bind_var("zone")
        .then(" ")
        .one_or_many()
        .digit()
        .bind_var("year");

    if let Some(err) = scan.error() {
        println!("scan failed: {err}");
        return;
    }

    for (label, value) in scan.matches() {
        println!("{label:>12}: {value}");
    }
}
