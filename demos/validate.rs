use ogm::core::*;

fn main() {
    // ── 1. Structured notation ────────────────────────────────────────
    println!("=== Structured ===");
    for input in ["+++123/4567/89095+++", "+++123/4567/89000+++", "123/4567/89095"] {
        match parse_structured(input).and_then(validate) {
            Ok(code) => println!("  {input:<22} valid, numeric {code}"),
            Err(e) => println!("  {input:<22} invalid: {e}"),
        }
    }

    // ── 2. Numeric notation ───────────────────────────────────────────
    println!("\n=== Numeric ===");
    for input in ["000000009797", "111111111127", "123456789000", "12345"] {
        match parse_numeric(input).and_then(validate) {
            Ok(code) => println!("  {input:<14} valid, {}", render(code)),
            Err(e) => {
                println!("  {input:<14} invalid: {e}");
                if let Some(code) = e.code() {
                    println!("  {:<14} rendered anyway as {}", "", render(code));
                }
            }
        }
    }

    // ── 3. Check digits by hand ───────────────────────────────────────
    println!("\n=== Check digits ===");
    for base in ["1234567890", "0000000097", "0000000096"] {
        println!("  base {base} -> check {}", compute_check(base));
    }
}
