#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod model {
    pub use rdfmem_model::*;
}

pub mod storage {
    pub use rdfmem_storage::*;
}
