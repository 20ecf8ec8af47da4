// src/args.rs
use crate::options::{IoMode, OutputFormat};
use clap::{ArgAction, Parser, ValueHint};
use onebrc_engine::config::DEFAULT_PATH;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "onebrc",
    version = crate::VERSION,
    about = "key;value 形式の巨大ファイルをキーごとに min/mean/max 集計するツール"
)]
pub struct Args {
    /// 入力ファイル (1行1レコード `key;value`)
    #[arg(value_hint = ValueHint::FilePath, default_value = DEFAULT_PATH)]
    pub file: PathBuf,

    /// 並列ワーカー数 (既定: CPU数)
    #[arg(short = 'j', long, help_heading = "実行")]
    pub workers: Option<usize>,

    /// 読み込み方式
    #[arg(long = "io", value_enum, default_value = "mmap", help_heading = "実行")]
    pub io_mode: IoMode,

    /// 境界探索の先読みバイト数 (1レコードの最大長より大きくすること)
    #[arg(long, help_heading = "実行")]
    pub lookahead: Option<usize>,

    /// buffered 方式の読み込みバッファサイズ (バイト)
    #[arg(long, help_heading = "実行")]
    pub buffer_size: Option<usize>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// レコード数・不正行数・チャンク範囲・所要時間を標準エラーに表示
    #[arg(long, help_heading = "出力")]
    pub stats: bool,

    /// ログを詳細にする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "出力")]
    pub verbose: u8,
}
