//! Общие контракты консоли оптики: DTO REST API и чистые вычисления,
//! которые используются фронтендом (рассрочка, деньги, маски, валидация,
//! сессия, маршрутизация).

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
