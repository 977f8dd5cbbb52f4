//! Cross-crate integration tests for the LongArith workspace live in `tests/`.
