//! Drive a menu reorder against a live admin backend.
//!
//! ```text
//! SLATE_BASE_URL=http://localhost:8080 SLATE_TOKEN=... \
//!     cargo run --example menu_reorder -- <drag_id> <hover_id> <fraction>
//! ```
//!
//! `fraction` is the simulated cursor position within the hovered row
//! (0.1 inserts before, 0.5 nests as child, 0.9 inserts after).

use anyhow::{bail, Context, Result};
use slate_client::{ClientConfig, NetworkHttpClient, SlateClient};
use slate_console::{logger, MenuEditor, QueryCache};
use std::sync::Arc;

const ROW_HEIGHT: f64 = 40.0;

fn print_tree(nodes: &[shared::models::Menu], depth: usize) {
    for node in nodes {
        println!(
            "{}{} ({}) -> {}",
            "  ".repeat(depth),
            node.menu_name,
            node.menu_id,
            node.path_url
        );
        print_tree(&node.children, depth + 1);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        bail!("usage: menu_reorder <drag_id> <hover_id> <fraction>");
    }
    let drag_id: i64 = args[0].parse().context("drag_id must be an integer")?;
    let hover_id: i64 = args[1].parse().context("hover_id must be an integer")?;
    let fraction: f64 = args[2].parse().context("fraction must be a number")?;

    let config = ClientConfig::from_env();
    let client = SlateClient::new(NetworkHttpClient::new(&config)?);
    let mut editor = MenuEditor::new(client, Arc::new(QueryCache::new()));

    editor.refresh().await?;
    println!("current menu tree:");
    print_tree(editor.tree(), 0);

    editor.begin_drag(drag_id);
    editor.hover_row(hover_id, fraction * ROW_HEIGHT, ROW_HEIGHT);

    match editor.complete_drop().await? {
        Some(order) => println!(
            "submitted: menuId={} targetMenuId={:?} parentId={}",
            order.menu_id, order.target_menu_id, order.parent_id
        ),
        None => println!("gesture resolved to a no-op, nothing submitted"),
    }

    println!("tree after refetch:");
    print_tree(editor.tree(), 0);
    Ok(())
}
