// crates/engine/src/config.rs
use crate::source::InputSource;
use derive_builder::Builder;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// 入力元（ファイルまたは標準入力）
    #[builder(default)]
    pub input: InputSource,
}
