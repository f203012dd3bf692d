//! 一次性提示消息
//!
//! 修改类操作在重定向前通过 [`Flash::push`] 写入一条提示，
//! 下一个渲染的页面通过 [`Flash::take`] 读取并清除它。
//! 提示以签名 cookie 保存，cookie 中只存放提示代码。

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use tower_cookies::{cookie::SameSite, Cookie, Cookies, Key};

const NOTICE_COOKIE: &str = "notice";

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    /// 删除时目标产品不存在
    Missing,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::Missing => "missing",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "created" => Some(Notice::Created),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            "missing" => Some(Notice::Missing),
            _ => None,
        }
    }

    /// 展示给用户的文本
    pub fn message(self) -> &'static str {
        match self {
            Notice::Created => "¡Producto creado con éxito!",
            Notice::Updated => "¡Producto actualizado exitosamente!",
            Notice::Deleted => "¡Producto eliminado exitosamente!",
            Notice::Missing => "El producto no existe.",
        }
    }

    pub fn is_success(self) -> bool {
        !matches!(self, Notice::Missing)
    }
}

/// 提示消息提取器
pub struct Flash {
    cookies: Cookies,
    key: Key,
}

impl Flash {
    /// 写入提示，覆盖尚未展示的旧提示
    pub fn push(&self, notice: Notice) {
        let mut cookie = Cookie::new(NOTICE_COOKIE, notice.code());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        self.cookies.signed(&self.key).add(cookie);
    }

    /// 读取并清除提示；签名无效的 cookie 同样被清除
    pub fn take(&self) -> Option<Notice> {
        self.cookies.get(NOTICE_COOKIE)?;

        let notice = self
            .cookies
            .signed(&self.key)
            .get(NOTICE_COOKIE)
            .and_then(|cookie| Notice::from_code(cookie.value()));

        let mut removal = Cookie::new(NOTICE_COOKIE, "");
        removal.set_path("/");
        self.cookies.remove(removal);

        notice
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state).await?;
        Ok(Self {
            cookies,
            key: Key::from_ref(state),
        })
    }
}
