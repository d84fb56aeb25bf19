pub mod texture_autoloader;
