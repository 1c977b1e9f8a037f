//! Codec drivers.
//!
//! A driver moves a [`Datum`] to and from a byte stream. Drivers are found by
//! path in a [`DriverRegistry`]: `module` selects the first class of a module,
//! `module.Class` a specific one. A [`DriverProxy`] holds the loaded driver
//! and is passed explicitly to every read and write.

use super::apache_driver::ApacheAvroBinaryDriver;
use super::datum::Datum;
use super::error::{CoreError, Result};
use super::json_driver::JsonDriver;
use super::object::AvroObject;
use std::fmt;
use std::io::{Read, Write};

/// Default driver path.
pub const DEFAULT_DRIVER: &str = "apache_avro_binary_driver";

/// Codec for a single datum.
pub trait AvroDriver: fmt::Debug + Send + Sync {
    /// Reads one datum.
    ///
    /// # Arguments
    /// * `canonical_schema` - Parsing Canonical Form of the written schema
    /// * `schema` - Raw schema JSON, used for logical types
    /// * `reader` - Source stream
    ///
    /// # Errors
    /// Returns `CoreError` if the stream cannot be read or decoded.
    fn read(&self, canonical_schema: &str, schema: &str, reader: &mut dyn Read) -> Result<Datum>;

    /// Writes one datum.
    ///
    /// # Errors
    /// Returns `CoreError` if the datum does not match the schema or the
    /// stream cannot be written.
    fn write(
        &self,
        canonical_schema: &str,
        schema: &str,
        datum: &Datum,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Constructor of a driver class.
pub type DriverFactory = fn() -> Result<Box<dyn AvroDriver>>;

#[derive(Debug, Clone)]
struct DriverModule {
    name: String,
    classes: Vec<(String, DriverFactory)>,
}

/// Catalog of driver modules and their classes.
#[derive(Debug, Clone)]
pub struct DriverRegistry {
    modules: Vec<DriverModule>,
}

impl Default for DriverRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("apache_avro_binary_driver", "ApacheAvroBinaryDriver", || {
            Ok(Box::new(ApacheAvroBinaryDriver::new()))
        });
        registry.register("json_driver", "JsonDriver", || Ok(Box::new(JsonDriver::new())));
        registry
    }
}

impl DriverRegistry {
    /// Creates a registry holding the built-in drivers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry without any driver.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Registers a driver class, creating its module on first use.
    pub fn register(&mut self, module: &str, class: &str, factory: DriverFactory) {
        let index = match self.modules.iter().position(|entry| entry.name == module) {
            Some(index) => index,
            None => {
                self.modules.push(DriverModule {
                    name: module.to_string(),
                    classes: Vec::new(),
                });
                self.modules.len() - 1
            }
        };
        self.modules[index].classes.push((class.to_string(), factory));
    }

    /// Module names in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.modules.iter().map(|module| module.name.as_str()).collect()
    }

    /// Class names of a module.
    #[must_use]
    pub fn classes(&self, module: &str) -> Option<Vec<&str>> {
        self.module(module)
            .map(|entry| entry.classes.iter().map(|(name, _)| name.as_str()).collect())
    }

    /// Resolves a driver path without instantiating the driver.
    ///
    /// # Errors
    /// Returns `CoreError::DriverModuleNotFound` or
    /// `CoreError::DriverClassNotFound`.
    pub fn resolve(&self, path: &str) -> Result<DriverFactory> {
        let (module_name, class_name) = match path.split_once('.') {
            Some((module, class)) => (module, Some(class)),
            None => (path, None),
        };
        let module = self
            .module(module_name)
            .ok_or_else(|| CoreError::DriverModuleNotFound {
                module: module_name.to_string(),
            })?;
        let class = match class_name {
            Some(class_name) => module.classes.iter().find(|(name, _)| name == class_name),
            None => module.classes.first(),
        };
        class
            .map(|(_, factory)| *factory)
            .ok_or_else(|| CoreError::DriverClassNotFound {
                module: module_name.to_string(),
                class: class_name.unwrap_or("<any>").to_string(),
            })
    }

    /// Loads a driver by path.
    ///
    /// # Arguments
    /// * `path` - `module` or `module.Class`
    ///
    /// # Errors
    /// Returns `CoreError::DriverModuleNotFound`,
    /// `CoreError::DriverClassNotFound` or `CoreError::DriverLoadFailure`.
    pub fn load(&self, path: &str) -> Result<Box<dyn AvroDriver>> {
        let factory = self.resolve(path)?;
        let driver = factory().map_err(|err| CoreError::DriverLoadFailure {
            driver: path.to_string(),
            reason: err.to_string(),
        })?;
        tracing::debug!("loaded driver '{}'", path);
        Ok(driver)
    }

    fn module(&self, name: &str) -> Option<&DriverModule> {
        self.modules.iter().find(|module| module.name == name)
    }
}

/// Explicit driver context for stream IO.
#[derive(Debug, Default)]
pub struct DriverProxy {
    driver: Option<Box<dyn AvroDriver>>,
}

impl DriverProxy {
    /// Creates a proxy with no driver loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a proxy around an existing driver.
    #[must_use]
    pub fn with_driver(driver: Box<dyn AvroDriver>) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    /// Creates a proxy with a built-in driver loaded.
    ///
    /// # Errors
    /// Returns the registry's load error.
    pub fn load(path: &str) -> Result<Self> {
        let mut proxy = Self::new();
        proxy.load_driver(&DriverRegistry::new(), path)?;
        Ok(proxy)
    }

    /// Loads a driver from a registry, replacing any loaded driver.
    ///
    /// # Errors
    /// Returns the registry's load error; the previous driver stays loaded.
    pub fn load_driver(&mut self, registry: &DriverRegistry, path: &str) -> Result<()> {
        self.driver = Some(registry.load(path)?);
        Ok(())
    }

    /// Returns `true` once a driver is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.driver.is_some()
    }

    /// Returns the loaded driver.
    ///
    /// # Errors
    /// Returns `CoreError::DriverUnloaded` if no driver is loaded.
    pub fn driver(&self) -> Result<&dyn AvroDriver> {
        self.driver.as_deref().ok_or(CoreError::DriverUnloaded)
    }

    /// Reads one object.
    ///
    /// # Errors
    /// Returns `CoreError::DriverUnloaded` if no driver is loaded, or the
    /// driver or decoding error.
    pub fn read<T: AvroObject, R: Read>(&self, reader: &mut R) -> Result<T> {
        let datum = self
            .driver()?
            .read(T::CANONICAL_SCHEMA, T::SCHEMA, reader)?;
        T::decode(datum)
    }

    /// Writes one object.
    ///
    /// # Errors
    /// Returns `CoreError::DriverUnloaded` if no driver is loaded, or the
    /// driver error.
    pub fn write<T: AvroObject, W: Write>(&self, object: &T, writer: &mut W) -> Result<()> {
        self.driver()?
            .write(T::CANONICAL_SCHEMA, T::SCHEMA, &object.encode(), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_builtin_modules() {
        let registry = DriverRegistry::new();
        assert_eq!(registry.list(), vec!["apache_avro_binary_driver", "json_driver"]);
        assert_eq!(
            registry.classes("json_driver"),
            Some(vec!["JsonDriver"])
        );
    }

    #[test]
    fn test_load_paths() {
        let registry = DriverRegistry::new();
        assert!(registry.load("apache_avro_binary_driver").is_ok());
        assert!(registry.load("json_driver.JsonDriver").is_ok());
        assert!(matches!(
            registry.load("missing_driver"),
            Err(CoreError::DriverModuleNotFound { .. })
        ));
        assert!(matches!(
            registry.load("json_driver.Missing"),
            Err(CoreError::DriverClassNotFound { .. })
        ));
    }

    #[test]
    fn test_load_failure_and_empty_registry() {
        let mut registry = DriverRegistry::empty();
        registry.register("failing", "Failing", || Err(CoreError::DriverUnloaded));
        assert!(matches!(
            registry.load("failing"),
            Err(CoreError::DriverLoadFailure { .. })
        ));
        assert!(registry.load("json_driver").is_err());
    }

    #[test]
    fn test_proxy_lifecycle() {
        let mut proxy = DriverProxy::new();
        assert!(!proxy.is_loaded());
        assert!(matches!(proxy.driver(), Err(CoreError::DriverUnloaded)));
        proxy
            .load_driver(&DriverRegistry::new(), DEFAULT_DRIVER)
            .expect("Failed to load");
        assert!(proxy.is_loaded());
        assert!(proxy.load_driver(&DriverRegistry::new(), "nope").is_err());
        assert!(proxy.is_loaded());
    }
}
