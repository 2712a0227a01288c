//! 内存分页
//!
use serde::{Deserialize, Serialize};

/// 一页数据；`page` 从 0 开始
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1).saturating_mul(self.per_page) < self.total_items
    }

    /// 本页第一行的序号（从 1 开始），用于表格行号
    pub fn first_row_number(&self) -> usize {
        self.page.saturating_mul(self.per_page).saturating_add(1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// 越界页返回空 `items`，总数照常计算；`per_page` 至少为 1
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = page.saturating_mul(per_page);

    let items = if start >= total_items {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(per_page).collect()
    };

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
