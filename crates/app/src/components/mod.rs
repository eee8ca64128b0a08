mod article_card;
mod notification_bell;
mod post_card;
mod stat_card;

pub use article_card::ArticleCard;
pub use notification_bell::NotificationBell;
pub use post_card::PostCard;
pub use stat_card::StatCard;
