// SEO artefacts derived from the catalog and résumé: JSON-LD documents,
// Open-Graph cards, and the sitemap.

pub mod handlers;
pub mod jsonld;
pub mod og;
pub mod sitemap;
