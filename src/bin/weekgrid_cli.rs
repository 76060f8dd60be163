//! CLI tool for weekgrid - runs grid operations on a JSON workbook
//!
//! Usage:
//!   weekgrid_cli <workbook.json> scan
//!   weekgrid_cli <workbook.json> create-week  [-o out.json]
//!   weekgrid_cli <workbook.json> archive-week [-o out.json]
//!   weekgrid_cli <workbook.json> grow <row> <units>  [-o out.json]
//!   weekgrid_cli <workbook.json> shrink <row> <rows> [-o out.json]
//!
//! Options:
//!   --config <cfg.json>  Layout configuration (defaults apply otherwise)
//!   -o <out.json>        Where to write the mutated workbook; without
//!                        it, mutating commands are a dry run

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::process::exit;

use weekgrid::types::Workbook;
use weekgrid::{
    archive_oldest_week, create_next_week, grow_current_week, shrink_current_week, Layout,
    LayoutConfig,
};

fn usage() -> ! {
    eprintln!(
        "Usage: weekgrid_cli <workbook.json> <scan|create-week|archive-week|grow|shrink> \
         [args] [--config cfg.json] [-o out.json]"
    );
    exit(1);
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config_path = take_flag(&mut args, "--config");
    let output_path = take_flag(&mut args, "-o");

    if args.len() < 2 {
        usage();
    }
    let workbook_path = args[0].clone();
    let command = args[1].clone();

    let cfg: LayoutConfig = match config_path {
        Some(path) => match fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(
            |text| serde_json::from_str(&text).map_err(|e| e.to_string()),
        ) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error reading config {}: {}", path, e);
                exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    let mut workbook: Workbook = match fs::read_to_string(&workbook_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(wb) => wb,
        Err(e) => {
            eprintln!("Error reading {}: {}", workbook_path, e);
            exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();

    let report = match command.as_str() {
        "scan" => {
            let result = workbook
                .sheet(&cfg.schedule_sheet)
                .map(|sheet| Layout::scan(sheet, &cfg));
            match result {
                Ok(layout) => serde_json::to_value(layout),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit(1);
                }
            }
        }
        "create-week" => {
            let result = workbook
                .two_sheets_mut(&cfg.template_sheet, &cfg.schedule_sheet)
                .and_then(|(template, target)| {
                    create_next_week(&*template, target, &cfg, today)
                });
            match result {
                Ok(block) => serde_json::to_value(block),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit(1);
                }
            }
        }
        "archive-week" => {
            workbook.ensure_sheet(&cfg.archive_sheet, cfg.default_height);
            let result = workbook
                .two_sheets_mut(&cfg.schedule_sheet, &cfg.archive_sheet)
                .and_then(|(target, archive)| archive_oldest_week(target, archive, &cfg));
            match result {
                Ok(report) => serde_json::to_value(report),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit(1);
                }
            }
        }
        "grow" | "shrink" => {
            if args.len() < 4 {
                usage();
            }
            let (row, count) = match (args[2].parse::<u32>(), args[3].parse::<u32>()) {
                (Ok(row), Ok(count)) => (row, count),
                _ => {
                    eprintln!("Error: row and count must be positive integers");
                    exit(1);
                }
            };
            let result = workbook.sheet_mut(&cfg.schedule_sheet).and_then(|sheet| {
                if command == "grow" {
                    grow_current_week(sheet, &cfg, row, count)
                } else {
                    shrink_current_week(sheet, &cfg, row, count)
                }
            });
            match result {
                Ok(block) => serde_json::to_value(block),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit(1);
                }
            }
        }
        _ => usage(),
    };

    let json = match report.and_then(|v| serde_json::to_string_pretty(&v)) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            exit(1);
        }
    };
    println!("{}", json);

    if command != "scan" {
        match output_path {
            Some(path) => {
                let out = serde_json::to_string_pretty(&workbook).unwrap();
                if let Err(e) = fs::write(&path, out) {
                    eprintln!("Error writing {}: {}", path, e);
                    exit(1);
                }
                eprintln!("Written: {}", path);
            }
            None => {
                eprintln!("(dry run: pass -o <out.json> to persist changes)");
            }
        }
    }
}

/// Remove `flag <value>` from the argument list, returning the value.
fn take_flag(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    if idx + 1 >= args.len() {
        usage();
    }
    let value = args[idx + 1].clone();
    args.drain(idx..=idx + 1);
    Some(value)
}
