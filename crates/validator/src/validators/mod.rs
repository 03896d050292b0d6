//! Built-in validators
//!
//! One type per format, each implementing [`Validate`](crate::foundation::Validate)
//! for `str`. Pattern-based formats share the [`LengthBound`] machinery:
//! an anchored pattern match and an independent length check, both required.
//!
//! # Categories
//!
//! - **Identifiers**: [`AlphanumericIdentifier`], [`Tag`], [`Language`], [`Topic`]
//! - **Names**: [`DisplayName`], [`UserDisplayName`]
//! - **Tokens**: [`CompactUuidV4`], [`OrderNumber`], [`JwtShape`]
//! - **Locations**: [`ContainerImage`], [`Email`], [`PermissionResource`], [`Path`], [`Url`]
//! - **Quantities and time**: [`MemorySize`], [`Timestamp`], [`LooseDate`]
//! - **Primitives**: [`Numeric`], [`Lowercase`], [`OneOf`]
//! - **Scoring**: [`PasswordStrength`]

mod format;

pub mod email;
pub mod identifier;
pub mod image;
pub mod jwt;
pub mod memory;
pub mod name;
pub mod order;
pub mod password;
pub mod primitive;
pub mod resource;
pub mod time;
pub mod url;
pub mod uuid;

pub use format::LengthBound;

pub use email::{Email, email};
pub use identifier::{
    AlphanumericIdentifier, Language, TAG_MAX_LENGTH, Tag, Topic, alphanumeric, language, tag,
    topic,
};
pub use image::{ContainerImage, docker_image};
pub use jwt::{JwtShape, jwt};
pub use memory::{MemorySize, memory_size};
pub use name::{DisplayName, UserDisplayName, display_name, user_display_name};
pub use order::{OrderNumber, order_number};
pub use password::{CHARACTER_CLASS_COUNT, PasswordPolicy, PasswordStrength, password};
pub use primitive::{Lowercase, Numeric, OneOf, lowercase, numeric, one_of};
pub use resource::{Path, PermissionResource, path, permission_resource};
pub use time::{LooseDate, Timestamp, loose_date, timestamp};
pub use url::{Url, url};
pub use uuid::{CompactUuidV4, uuid4_without_hyphens};
