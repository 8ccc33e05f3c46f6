//! Random, checksum-valid codes.
//!
//! Generated codes often end up printed on invoices as payment references,
//! so the default source is the operating system CSPRNG. Any other
//! [`RngCore`] can be plugged in, e.g. a seeded `StdRng` for reproducible
//! tests.
//!
//! ```rust
//! use ogm::generate::Generator;
//!
//! let code = Generator::new().generate();
//! assert!(code.has_valid_check());
//! ```

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use tracing::trace;

use crate::core::{BASE_LIMIT, Code};

/// Draws codes from a random source it owns.
#[derive(Debug, Clone)]
pub struct Generator<R = OsRng> {
    rng: R,
}

impl Generator<OsRng> {
    /// Generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Generator<R> {
    /// Generator backed by a caller-supplied source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// A uniformly random base in `[0, 10^10)` with its check digits.
    pub fn generate(&mut self) -> Code {
        let base = self.rng.gen_range(0..BASE_LIMIT);
        let code = Code::sealed(base);
        trace!(%code, "generated code");
        code
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> Iterator for Generator<R> {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        Some(self.generate())
    }
}

/// One code from a fresh OS-backed generator.
pub fn generate_code() -> Code {
    Generator::new().generate()
}
