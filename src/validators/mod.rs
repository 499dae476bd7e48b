//! Built-in validators and validator factories.
//!
//! Every item here satisfies [`Validator`](crate::Validator): fixed validators are
//! plain functions, parametrized ones are factories returning closures.
//!
//! | Module | Validators |
//! |--------|------------|
//! | numeric | `number_env`, `integer_env`, `range_env`, `port_env`, ... |
//! | string | `string_env`, `min_length`, `max_length`, `length`, `enum_env`, `pattern_env`, ... |
//! | boolean | `bool_env` |
//! | array | `array_env`, `number_array_env`, `integer_array_env`, `boolean_array_env` |
//! | format | `email_env`, `hostname_env`, `ipv4_env`, `uuid_env`, `semver_env`, ... |
//! | json | `json_env`, `json_as` |
//! | url | `url_env` (feature `url`) |
//! | time | `iso_date_env`, `date_env` (feature `chrono`) |

mod array;
mod boolean;
mod format;
mod json;
mod numeric;
mod string;
#[cfg(feature = "chrono")]
mod time;
#[cfg(feature = "url")]
mod url;

pub use array::{array_env, boolean_array_env, integer_array_env, number_array_env};
pub use boolean::{bool_env, parse_bool};
pub use format::{
    base64_env, credit_card_env, domain_env, email_env, hex_color_env, hex_env, hostname_env,
    ipv4_env, ipv6_env, jwt_env, mac_address_env, mime_type_env, mongodb_uri_env, phone_env,
    postgres_uri_env, redis_uri_env, semver_env, slug_env, uuid_env,
};
pub use json::{json_as, json_env};
pub use numeric::{
    integer_env, latitude_env, longitude_env, max_env, min_env, negative_env, non_negative_env,
    number_env, percentage_env, port_env, positive_env, range_env, timestamp_env,
};
pub use string::{
    enum_env, length, lowercase_env, max_length, min_length, non_empty_env, pattern_env,
    string_env, trimmed_env, uppercase_env,
};
#[cfg(feature = "chrono")]
pub use time::{date_env, iso_date_env};
#[cfg(feature = "url")]
pub use self::url::url_env;
