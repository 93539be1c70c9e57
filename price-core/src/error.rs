use thiserror::Error;

/// Ошибки разбора ответа `data/price`
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// API вернул `"Response": "Error"` в теле ответа
    #[error("api error: {0}")]
    Api(String),

    /// Значение под ключом должно быть числом
    #[error("value for {key:?} is not a number (found {found})")]
    NonNumeric {
        /// Символ, под которым лежит значение
        key: String,
        /// Тип JSON-значения, которое пришло вместо числа
        found: &'static str,
    },

    /// Тело ответа не JSON-объект
    #[error("response body is not a json object (found {0})")]
    NotAnObject(&'static str),
}
