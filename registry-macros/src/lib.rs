//! 户籍登记领域宏（registry-macros）
//!
//! - `#[entity]`：为结构体补齐 `id`/`version` 字段并实现 `registry_domain::entity::Entity`
//! - `#[entity_id]`：为单字段 tuple struct 生成标识类型所需的派生与转换
//! - `#[value_object]`：为值对象合并常用派生
//!
use proc_macro::TokenStream;

mod args;
mod derives;
mod entity;
mod entity_id;
mod fields;
mod value_object;

/// 实体宏
///
/// 参数：`#[entity(id = IdType, debug = true|false)]`，`id` 默认 `String`，`debug` 默认 `true`。
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体标识宏，仅支持 `struct XxxId(Inner);`
///
/// 参数：`#[entity_id(debug = true|false)]`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏，支持结构体与枚举
///
/// 参数：`#[value_object(debug = true|false)]`。
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
