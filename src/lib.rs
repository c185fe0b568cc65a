//! A randomized binary search tree keyed on star names, plus the catalog glue that feeds it.

#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod entry;
pub mod catalog;
pub mod treap;
