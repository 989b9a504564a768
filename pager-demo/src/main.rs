use std::env;

use tracing::info;

use pager_request::PageRequestBuilder;
use pager_window::{FixedWidthCalculator, WindowCalculator, total_pages};

const DEFAULT_ITEM_COUNT: usize = 95;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let width = env_or("PAGER_WIDTH", pager_window::DEFAULT_WIDTH)?;
    let page_size = env_or("PAGER_PAGE_SIZE", pager_request::DEFAULT_PAGE_SIZE)?;
    let item_count = env_or("PAGER_ITEM_COUNT", DEFAULT_ITEM_COUNT)?;
    let sort_str = env::var("PAGER_SORT").unwrap_or_else(|_| "id:ASC,name:DESC".to_owned());

    let calculator = FixedWidthCalculator::new(width);
    let builder = PageRequestBuilder::new(page_size);

    let total = total_pages(item_count, page_size);
    info!(item_count, page_size, total, width, "walking the result set");

    for page in 0..total {
        let window = calculator.calculate_window(page, total);
        let request = builder.page_request_with_default_size(page, Some(&sort_str));

        info!(page, %window, ?request, "page computed");
    }

    Ok(())
}

/// Read a numeric setting from the environment, falling back to a default
/// when the variable is absent.
fn env_or(key: &str, default: usize) -> anyhow::Result<usize> {
    match env::var(key) {
        Ok(value) => Ok(value.trim().parse()?),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(source) => Err(source.into()),
    }
}
