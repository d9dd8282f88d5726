//! Menu file commands.

use std::path::Path;

use comandera_core::{Menu, MenuCategory, MenuItem, MenuItemId, Money};

/// Parse and validate a menu file, reporting its shape.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid menu JSON, or
/// violates a menu invariant (duplicate ids, duplicate categories).
pub async fn check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let menu: Menu = serde_json::from_str(&raw)?;
    menu.validate()?;

    for category in menu.categories() {
        tracing::info!(
            category = %category.name,
            items = category.items.len(),
            "Category OK"
        );
    }
    tracing::info!(
        categories = menu.categories().len(),
        items = menu.item_count(),
        "Menu file is valid"
    );

    Ok(())
}

/// Write a starter menu file.
///
/// # Errors
///
/// Returns an error if the file already exists (and `force` is not set) or
/// cannot be written.
pub async fn seed(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    let menu = starter_menu();
    let json = serde_json::to_string_pretty(&menu)?;
    tokio::fs::write(path, json).await?;

    tracing::info!(path = %path.display(), items = menu.item_count(), "Starter menu written");
    Ok(())
}

fn starter_menu() -> Menu {
    let item = |id: i64, name: &str, ingredients: &str, pesos: i64| MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        ingredients: ingredients.to_string(),
        price: Money::from_pesos(pesos),
        image_url: None,
    };

    Menu::new(vec![
        MenuCategory {
            name: "Starters".to_string(),
            items: vec![item(1, "Empanada de pino", "beef, onion, olive, egg", 2500)],
        },
        MenuCategory {
            name: "Main dishes".to_string(),
            items: vec![item(10, "Lomo a lo pobre", "beef loin, fries, fried egg", 12_500)],
        },
        MenuCategory {
            name: "Drinks".to_string(),
            items: vec![item(20, "Pisco sour", "pisco, lemon, sugar", 4500)],
        },
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_menu_is_valid() {
        let menu = starter_menu();
        assert!(menu.validate().is_ok());
        assert!(menu.item_count() > 0);
    }

    #[test]
    fn test_starter_menu_roundtrips_through_json() {
        let menu = starter_menu();
        let json = serde_json::to_string_pretty(&menu).unwrap();
        let parsed: Menu = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, menu);
    }
}
