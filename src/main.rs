//! # rdfkit - 径向分布函数计算工具
//!
//! 计算 MD 轨迹快照或理想晶格 (FCC/BCC/HCP/SC) 的径向分布函数 g(r)。
//!
//! ## 子命令
//! - `trajectory` - MD 轨迹快照的 RDF
//! - `lattice`    - 理想晶格的理论 RDF（可选首峰归一化）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (轨迹解析器)
//!   │     ├── rdf/       (镜像扩展、距离枚举、分箱归一化、绘图、导出)
//!   │     ├── batch/     (并行执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod rdf;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e.to_string());
        if let Some(hint) = e.hint() {
            utils::output::print_hint(hint);
        }
        std::process::exit(1);
    }
}
