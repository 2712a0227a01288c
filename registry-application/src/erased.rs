//! 总线共用的类型擦除处理器
//!
use crate::{context::AppContext, error::AppError};
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub(crate) type BoxAnySend = Box<dyn Any + Send>;

pub(crate) type HandlerFuture<'a> =
    Pin<Box<dyn Future<Output = Result<BoxAnySend, AppError>> + Send + 'a>>;

pub(crate) type HandlerFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppContext) -> HandlerFuture<'a> + Send + Sync>;

/// 固定闭包的高阶生命周期签名
pub(crate) fn erase<F>(f: F) -> HandlerFn
where
    F: for<'a> Fn(BoxAnySend, &'a AppContext) -> HandlerFuture<'a> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 还原处理器输出
pub(crate) fn restore<T: 'static>(out: BoxAnySend, expected: &'static str) -> Result<T, AppError> {
    out.downcast::<T>()
        .map(|value| *value)
        .map_err(|_| AppError::TypeMismatch {
            expected,
            found: "unknown",
        })
}
