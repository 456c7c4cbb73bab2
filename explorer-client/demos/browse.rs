//! Browse the catalog from the terminal
//!
//! Run: cargo run --example browse -- [all|name|barcode|category] [query] [sort] [page]
//!
//! Reads `FOOD_*` variables from the environment or a `.env` file.

use explorer_client::{CatalogSession, ClientConfig, FetchOutcome, SharedCart, SortKey, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("all");
    let query = args.get(2).map(String::as_str).unwrap_or("");
    let sort = args.get(3).map(|s| SortKey::parse(s)).unwrap_or_default();
    let page = args.get(4).and_then(|p| p.parse().ok()).unwrap_or(1);

    let config = ClientConfig::from_env();
    println!("Catalog: {}", config.base_url);
    let session = CatalogSession::new(config.build_catalog_client()?);

    if let Err(e) = session.load_categories().await {
        println!("Categories unavailable: {}", e);
    }

    let outcome = match mode {
        "name" => session.search_by_name(query).await,
        "barcode" => session.search_by_barcode(query).await,
        "category" => session.select_category(query).await,
        _ => session.load_initial().await,
    };
    match &outcome {
        FetchOutcome::Failed(e) => println!("Failed to load products: {}", e),
        FetchOutcome::NotFound => println!("No product with barcode {}", query),
        _ => {}
    }

    session.set_sort(sort);
    session.goto_page(page);
    let view = session.view();

    match view.showing() {
        Some((first, last, total)) => println!("Showing {}-{} of {} ({})", first, last, total, sort),
        None => println!("No products"),
    }
    for product in &view.items {
        println!(
            "  [{}] {:<40} {:<20} grade {}",
            product.display_code(),
            product.display_name(),
            product.display_brands(),
            product.grade_label()
        );
    }

    let labels: Vec<String> = view.page_labels.iter().map(|l| l.to_string()).collect();
    println!("Pages: {}", labels.join(" "));

    let cart = SharedCart::new();
    for product in view.items.iter().filter(|p| p.is_cartable()).take(3) {
        cart.add_or_increment(product)?;
    }
    println!("Cart: {} item(s)", cart.total_quantity());

    let categories = session.categories();
    if !categories.is_empty() {
        println!("Categories: {}", categories.join(", "));
    }

    Ok(())
}
