use ogm::core::{RejectionKind, Response};
use ogm::recovery::QueryReadings;
use ogm::service::{Operation, StructuredComm};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let svc = StructuredComm::new();

    // ── 1. Mapping rejections onto transport status codes ─────────────
    println!("=== Rejection kinds ===");
    for (op, value) in [
        (Operation::ValidateNumeric, "123456789095"),
        (Operation::ValidateNumeric, "123456789000"),
        (Operation::ValidateStructured, "123/4567/89095"),
        (Operation::IdentifyNumericInLine, "Code 1234567890950"),
        (Operation::IdentifyStructuredInLine, "  "),
    ] {
        let result = svc.run(op, value);
        let status = match result.rejection().map(|r| r.kind()) {
            None => 200,
            Some(RejectionKind::ChecksumMismatch) => 422,
            Some(RejectionKind::NotFound) => 404,
            Some(RejectionKind::Format | RejectionKind::Blank) => 400,
            Some(_) => 400,
        };
        println!("  {op:<28} {value:<22} -> {status}");
    }

    // ── 2. A query string whose `+` became spaces ─────────────────────
    println!("\n=== Recovery ===");
    let query = "value=+++123/4567/89095+++";
    if let Some(readings) = QueryReadings::parse(query, "value") {
        println!("  primary reading: {:?}", readings.primary);
        println!("  raw reading:     {:?}", readings.raw);
        let recovered = readings.recover(|v| svc.validate_structured(v));
        match recovered.step {
            Some(step) => println!("  recovered at step '{step}' after {} attempts", recovered.attempts),
            None => println!("  not recoverable"),
        }
        let response = Response::from(recovered.into_result());
        println!("  response: {response:?}");
    }
}
