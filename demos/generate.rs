use ogm::generate::Generator;

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|n| n.parse().ok())
        .unwrap_or(5);

    for code in Generator::new().take(count) {
        println!("{}  {}", code, code.to_structured());
    }
}
