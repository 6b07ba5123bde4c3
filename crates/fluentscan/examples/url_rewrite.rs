//! Scans a URL, captures its protocol, and rewrites the host and the last
//! path segment in one pass.
//!
//! The replacement buffer tracks how much earlier splices changed the
//! string's length, so the later edits still land on the right spans even
//! though `"example"` and `"foobar"` differ in length.
//!
//! Run with
//!
//! ```bash
//! cargo run -p fluentscan --example url_rewrite
//! ```

use fluentscan::Scanner;

fn main() {
    let scan = Scanner::new("ftp://example.com:3000/test/")
        .one_of(&["http", "ftp"])
        .bind_var("protocol")
        .then("://")
        .until(".com")
        .replace_with("foobar")
        .then(".com")
        .replace_with(".io")
        .then(":")
        .one_or_many()
        .digit()
        .bind_var("port")
        .then("/")
        .until("/")
        .replace_with("main");

    if let Some(err) = scan.error() {
        println!("scan failed: {err}");
        return;
    }

    println!("captures:  {:?}", scan.matches());
    println!("rewritten: {}", scan.replaced_string());
}
