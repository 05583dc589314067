#![deny(rust_2018_idioms)]
#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::{
    ad::{Ad, Condition, Dimension},
    config::Config,
    pagination::Pagination,
    targeting::{Predicate, Targeting},
};

pub mod ad;
pub mod api;
pub mod config;
pub mod pagination;
pub mod targeting;

pub mod util {
    pub mod logging;
}

#[cfg(any(test, feature = "test-util"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub mod test_util;
