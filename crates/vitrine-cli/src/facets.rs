//! The `facets` command: print the backend's facet tables.

use vitrine_client::StorefrontClient;
use vitrine_core::FacetEntry;

/// Fetches and prints the category, material, and grade tables.
///
/// # Errors
///
/// Returns an error if any facet endpoint fails; the tables are small and
/// printing a partial listing would be misleading.
pub(crate) async fn run_facets(client: &StorefrontClient) -> anyhow::Result<()> {
    let (categories, materials, grades) = tokio::try_join!(
        client.fetch_categories(),
        client.fetch_materials(),
        client.fetch_grades(),
    )?;

    print_table("categories", &categories);
    print_table("materials", &materials);
    print_table("grades", &grades);
    Ok(())
}

fn print_table(name: &str, entries: &[FacetEntry]) {
    println!("{name} ({}):", entries.len());
    for entry in entries {
        println!("  {:<20} {}", entry.id, entry.label);
    }
}
