pub use super::category::Entity as Category;
pub use super::post::Entity as Post;
pub use super::sponsor::Entity as Sponsor;
pub use super::user::Entity as User;
