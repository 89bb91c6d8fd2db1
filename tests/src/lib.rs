//! Cross-crate scenarios: the registry driven over real files.

#[cfg(test)]
mod emergency_flow;
#[cfg(test)]
mod persistence_roundtrip;
#[cfg(test)]
mod walkthrough;

#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
