pub mod get_by_slug;
pub mod list;
pub mod list_by_tag;
pub mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use list_by_tag::ListArticlesByTagQuery;
pub use service::ArticleQueryService;
