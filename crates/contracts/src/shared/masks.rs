//! Маски ввода для бразильских документов и телефонов (CPF, CEP, телефон)

/// Оставляет только цифры
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn take_digits(value: &str, max: usize) -> String {
    digits_only(value).chars().take(max).collect()
}

/// CPF: `999.999.999-99`, маска накладывается по мере ввода
pub fn format_cpf(value: &str) -> String {
    let d = take_digits(value, 11);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// CEP: `99999-999`
pub fn format_cep(value: &str) -> String {
    let d = take_digits(value, 8);
    if d.len() <= 5 {
        d
    } else {
        format!("{}-{}", &d[..5], &d[5..])
    }
}

/// Телефон: `(99) 9999-9999` для фиксированных, `(99) 99999-9999` для мобильных
pub fn format_phone(value: &str) -> String {
    let d = take_digits(value, 11);
    match d.len() {
        0 => d,
        1..=2 => format!("({}", d),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Номер для ссылки WhatsApp: только цифры с кодом страны 55
pub fn phone_for_whatsapp(phone: &str) -> String {
    let d = digits_only(phone);
    if d.starts_with("55") {
        d
    } else {
        format!("55{}", d)
    }
}

/// Ссылка `https://wa.me/...` или `None`, если в телефоне нет цифр
pub fn whatsapp_link(phone: &str) -> Option<String> {
    if digits_only(phone).is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{}", phone_for_whatsapp(phone)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cpf_progressive() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("1234567890"), "123.456.789-0");
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format_cpf("123.456.789-0199"), "123.456.789-01");
    }

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310"), "01310");
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310-1009"), "01310-100");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("1123"), "(11) 23");
        assert_eq!(format_phone("1123456789"), "(11) 2345-6789");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("(11) 98765-43210"), "(11) 98765-4321");
    }

    #[test]
    fn test_whatsapp() {
        assert_eq!(phone_for_whatsapp("(11) 98765-4321"), "5511987654321");
        assert_eq!(phone_for_whatsapp("5511987654321"), "5511987654321");
        assert_eq!(
            whatsapp_link("(11) 98765-4321").as_deref(),
            Some("https://wa.me/5511987654321")
        );
        assert_eq!(whatsapp_link("sem telefone"), None);
    }
}
