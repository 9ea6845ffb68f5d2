//! User-facing confirmation and error messages.
//!
//! The catalog's clients expect Russian text; responses must keep it
//! unescaped.

use crate::types::DbId;

pub const MOVIE_NOT_FOUND: &str = "Нет такого фильма";

pub fn movie_created(id: DbId) -> String {
    format!("Новый объект с id {id} создан")
}

pub fn movie_updated(id: DbId) -> String {
    format!("Объект с id {id} обновлен")
}

pub fn movie_deleted(id: DbId) -> String {
    format!("Объект с id {id} удален")
}
