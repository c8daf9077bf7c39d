//! `mockall` doubles for engine traits.

use gvm_core::OutputSink;
use mockall::mock;

mock! {
    pub Sink {}

    impl OutputSink for Sink {
        fn emit(&mut self, value: i64);
    }
}
