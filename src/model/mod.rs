//! Article entity and list helpers.

mod article;
mod listing;

pub use article::{
    random_cover_image, Article, ArticleDraft, ArticleId, NewArticle, ValidationError, CATEGORIES,
    COVER_IMAGES,
};
pub use listing::{all_categories, sort_by_date_desc, visible_articles};
