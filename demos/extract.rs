use ogm::core::Notation;
use ogm::extract::{find_all, identify};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let lines = [
        "Please pay +++123/4567/89095+++ today.",
        "Ref 123456789095 attached",
        "Code 1234567890950 (13 digits)",
        "Batch: 111111111127, 999999999949, 123456789000",
        "   ",
    ];

    for line in lines {
        println!("{line:?}");
        for notation in [Notation::Structured, Notation::Numeric] {
            match identify(line, notation) {
                Ok(code) => println!("  {notation:<16} -> {} ({code})", code.to_structured()),
                Err(e) => println!("  {notation:<16} -> {e}"),
            }
        }
        let all: Vec<&str> = find_all(line, Notation::Numeric).map(|m| m.as_str()).collect();
        if all.len() > 1 {
            println!("  all numeric      -> {all:?}");
        }
    }
}
