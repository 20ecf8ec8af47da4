use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{key=min/mean/max, ...}` の1行
    #[default]
    Text,
    /// キーごとのJSON配列
    Json,
}

/// 入力ファイルの読み込み方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum IoMode {
    /// 読み取り専用メモリマップを全ワーカーで共有
    #[default]
    Mmap,
    /// ワーカーごとにファイルを開き seek + バッファ読み込み
    Buffered,
}

impl From<IoMode> for onebrc_engine::options::IoMode {
    fn from(mode: IoMode) -> Self {
        match mode {
            IoMode::Mmap => Self::Mmap,
            IoMode::Buffered => Self::Buffered,
        }
    }
}
