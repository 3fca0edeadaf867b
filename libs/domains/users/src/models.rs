use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted user.
///
/// `id` is `None` until the first save; storage assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Replace every mutable field with the DTO's values.
    ///
    /// Fields missing from the DTO become `None`; the id never changes.
    pub fn apply(&mut self, dto: UserDto) {
        self.first_name = dto.first_name;
        self.last_name = dto.last_name;
        self.email = dto.email;
    }
}

/// Wire representation of a user, used for request and response bodies.
///
/// Every field is optional on input and `id` is ignored there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "John")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Drops any client-supplied id.
impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: None,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}
