// Use cases layer: scan intake and pass submission workflows.

pub mod scan_submitter;
#[cfg(test)]
pub(crate) mod test_support;

pub use scan_submitter::ScanSubmitter;
