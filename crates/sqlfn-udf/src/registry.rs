//! # Function Registry
//!
//! Name resolution and evaluation for the warehouse scalar functions.
//! Lookup is case-insensitive, as SQL identifiers are.

use sqlfn_core::{
    extract_digits, extract_with_contract, ConfigError, ExtractContract, FunctionConfig, SqlValue,
};
use sqlfn_crypto::fingerprint_of_digits;

use crate::error::UdfError;

/// The scalar functions a registry can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarFunction {
    /// Keep the decimal digits of the argument.
    ExtractDigits,
    /// Non-digit extraction under the registry's contract.
    ExtractStrings,
    /// SHA-256 hex of the decimal digits of the argument.
    DigitsSha256,
}

impl ScalarFunction {
    /// Every function, in registration order.
    pub const ALL: [ScalarFunction; 3] = [
        Self::ExtractDigits,
        Self::ExtractStrings,
        Self::DigitsSha256,
    ];

    /// Canonical SQL name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtractDigits => "EXTRACT_DIGITS",
            Self::ExtractStrings => "EXTRACT_STRINGS",
            Self::DigitsSha256 => "DIGITS_SHA256",
        }
    }

    /// Alternate SQL name accepted at lookup.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::ExtractDigits => "GET_NUMERIC",
            Self::ExtractStrings => "GET_STRINGS",
            Self::DigitsSha256 => "FINGERPRINT_DIGITS",
        }
    }

    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize {
        1
    }

    /// Resolve a SQL name or alias, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == upper || f.alias() == upper)
    }
}

impl std::fmt::Display for ScalarFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluates scalar function calls against a fixed configuration.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    contract: ExtractContract,
}

impl FunctionRegistry {
    /// Build a registry from a validated configuration.
    pub fn new(config: FunctionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let contract = config.contract();
        if contract.is_fallible() {
            tracing::info!(
                contract = %config.non_digit_contract,
                width = config.truncate_width,
                "EXTRACT_STRINGS uses the truncate-and-validate contract"
            );
        }
        Ok(Self { contract })
    }

    /// The contract `EXTRACT_STRINGS` applies.
    pub fn contract(&self) -> ExtractContract {
        self.contract
    }

    /// Canonical names of all registered functions.
    pub fn names(&self) -> Vec<&'static str> {
        ScalarFunction::ALL.iter().map(ScalarFunction::name).collect()
    }

    /// Resolve `name` and evaluate it on `args`.
    ///
    /// # Errors
    ///
    /// - [`UdfError::UnknownFunction`] if `name` is not registered.
    /// - [`UdfError::ArgumentCount`] for the wrong number of arguments.
    /// - [`UdfError::Extract`] when the truncate contract rejects the argument.
    pub fn call(&self, name: &str, args: &[SqlValue]) -> Result<SqlValue, UdfError> {
        let function = ScalarFunction::from_name(name)
            .ok_or_else(|| UdfError::UnknownFunction(name.to_string()))?;
        self.invoke(function, args)
    }

    /// Evaluate an already-resolved function on `args`.
    pub fn invoke(
        &self,
        function: ScalarFunction,
        args: &[SqlValue],
    ) -> Result<SqlValue, UdfError> {
        tracing::debug!(
            function = function.name(),
            arity = args.len(),
            "evaluating scalar function"
        );

        let [arg] = args else {
            return Err(UdfError::ArgumentCount {
                function: function.name(),
                expected: function.arity(),
                got: args.len(),
            });
        };
        let Some(input) = arg.as_numeric_text() else {
            return Ok(SqlValue::Null);
        };

        match function {
            ScalarFunction::ExtractDigits => Ok(SqlValue::Text(extract_digits(&input.render()))),
            ScalarFunction::ExtractStrings => extract_with_contract(input, self.contract)
                .map(SqlValue::Text)
                .map_err(|e| {
                    // Column values may be sensitive; log only their shape.
                    tracing::warn!(
                        function = function.name(),
                        argument_type = arg.type_name(),
                        argument_chars = input.render().chars().count(),
                        error = %e,
                        "contract rejected argument"
                    );
                    UdfError::from(e)
                }),
            ScalarFunction::DigitsSha256 => {
                Ok(SqlValue::Text(fingerprint_of_digits(&input.render())))
            }
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self {
            contract: FunctionConfig::default().contract(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfn_core::{ContractKind, ExtractError};

    fn text(s: &str) -> SqlValue {
        SqlValue::from(s)
    }

    #[test]
    fn resolves_names_case_insensitively() {
        let cases = [
            ("extract_digits", Some(ScalarFunction::ExtractDigits)),
            (" Get_Strings ", Some(ScalarFunction::ExtractStrings)),
            ("fingerprint_digits", Some(ScalarFunction::DigitsSha256)),
            ("UPPER", None),
        ];
        for (name, expected) in cases {
            assert_eq!(ScalarFunction::from_name(name), expected, "{name}");
        }
    }

    #[test]
    fn names_lists_canonical_names() {
        let registry = FunctionRegistry::default();
        assert_eq!(
            registry.names(),
            vec!["EXTRACT_DIGITS", "EXTRACT_STRINGS", "DIGITS_SHA256"]
        );
    }

    #[test]
    fn extract_digits_on_text_and_integer() {
        let registry = FunctionRegistry::default();
        assert_eq!(
            registry.call("EXTRACT_DIGITS", &[text("abc123def456xyz")]).unwrap(),
            text("123456")
        );
        assert_eq!(
            registry.call("EXTRACT_DIGITS", &[SqlValue::Integer(-907)]).unwrap(),
            text("907")
        );
    }

    #[test]
    fn extract_strings_default_contract() {
        let registry = FunctionRegistry::default();
        assert_eq!(
            registry.call("EXTRACT_STRINGS", &[text("abc123def456xyz")]).unwrap(),
            text("abcdefxyz")
        );
        assert_eq!(
            registry.call("EXTRACT_STRINGS", &[SqlValue::Integer(12345)]).unwrap(),
            text("")
        );
    }

    #[test]
    fn digits_sha256_matches_crypto_crate() {
        let registry = FunctionRegistry::default();
        assert_eq!(
            registry.call("DIGITS_SHA256", &[text("abc123def456xyz")]).unwrap(),
            text("8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92")
        );
        assert_eq!(
            registry.call("DIGITS_SHA256", &[SqlValue::Integer(123456)]).unwrap(),
            registry.call("DIGITS_SHA256", &[text("123456")]).unwrap()
        );
    }

    #[test]
    fn null_in_null_out() {
        let registry = FunctionRegistry::default();
        for function in ScalarFunction::ALL {
            assert_eq!(registry.invoke(function, &[SqlValue::Null]).unwrap(), SqlValue::Null);
        }
    }

    #[test]
    fn wrong_arity_rejected() {
        let registry = FunctionRegistry::default();
        let err = registry.call("EXTRACT_DIGITS", &[]).unwrap_err();
        assert_eq!(
            err,
            UdfError::ArgumentCount {
                function: "EXTRACT_DIGITS",
                expected: 1,
                got: 0
            }
        );
        assert!(registry.call("DIGITS_SHA256", &[text("1"), text("2")]).is_err());
    }

    #[test]
    fn unknown_function_rejected() {
        let registry = FunctionRegistry::default();
        let err = registry.call("REGEXP_REPLACE", &[text("x")]).unwrap_err();
        assert_eq!(err, UdfError::UnknownFunction("REGEXP_REPLACE".to_string()));
    }

    #[test]
    fn truncate_contract_through_registry() {
        let config = FunctionConfig {
            non_digit_contract: ContractKind::TruncatePrefix,
            ..FunctionConfig::default()
        };
        let registry = FunctionRegistry::new(config).unwrap();
        assert_eq!(
            registry.call("GET_STRINGS", &[SqlValue::Integer(98765)]).unwrap(),
            text("987")
        );
        let err = registry.call("GET_STRINGS", &[SqlValue::Integer(42)]).unwrap_err();
        assert_eq!(
            err,
            UdfError::Extract(ExtractError::InsufficientDigits {
                required: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let config = FunctionConfig {
            truncate_width: 0,
            ..FunctionConfig::default()
        };
        assert!(matches!(
            FunctionRegistry::new(config),
            Err(ConfigError::InvalidWidth(0))
        ));
    }

    #[test]
    fn registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FunctionRegistry>();
    }
}
