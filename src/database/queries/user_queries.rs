use crate::database::DatabaseConnection;
use crate::domain::UserReference;
use crate::models::User;
use crate::schema::users;
use diesel::prelude::*;
use diesel::SelectableHelper;
use diesel_async::RunQueryDsl;

#[tracing::instrument(name = "Find user by reference", skip(connection))]
pub async fn find_user(
    connection: &mut DatabaseConnection,
    reference: &UserReference,
) -> Result<Option<User>, diesel::result::Error> {
    let query = users::table.select(User::as_select()).into_boxed();
    let query = match reference {
        UserReference::Id(id) => query.filter(users::id.eq(*id)),
        UserReference::Uuid(uuid) => query.filter(users::uuid.eq(*uuid)),
    };
    query.first(connection).await.optional()
}
