use super::AggregateId;

/// Трейт для корня агрегата
///
/// Определяет идентификатор записи и статические метаданные, из которых
/// строятся пути REST API и подписи в интерфейсе.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    /// Получить описание/название записи для списков и заголовков
    fn description(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в REST API (например, "clientes")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Cliente")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Clientes")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Путь коллекции в API (например, "/clientes")
    fn api_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Путь конкретной записи в API (например, "/clientes/64b7...")
    fn item_path(id: &Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }

    /// Полное имя агрегата для системы (например, "a001_clientes")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
