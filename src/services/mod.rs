// Services module for the scan and rewrite passes
pub mod extractor;
pub mod rewriter;
