pub mod cookies;
pub mod fingerprint;
pub mod scoring;
pub mod thirdparty;
