pub mod create;
pub mod delete;
pub mod seo;
pub mod service;
pub mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
