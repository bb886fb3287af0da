// src/services/seed_service.rs

//! One-shot meal catalog seeding, run at startup when `SEED_DB=true`.

use crate::errors::{AppError, Result};
use sqlx::PgPool;
use tracing::{error, info, instrument};
use uuid::Uuid;

struct SeedMeal {
  name: &'static str,
  description: &'static str,
  price_cents: i32,
  category: &'static str,
  image_url: &'static str,
}

const INITIAL_MEALS: [SeedMeal; 5] = [
  SeedMeal {
    name: "Classic Cheeseburger",
    description: "Juicy beef patty with melted cheese, lettuce, and tomato",
    price_cents: 1299,
    category: "Burgers",
    image_url: "/images/cheeseburger.jpg",
  },
  SeedMeal {
    name: "Margherita Pizza",
    description: "Traditional pizza with fresh mozzarella, tomatoes, and basil",
    price_cents: 1450,
    category: "Pizzas",
    image_url: "/images/margherita.jpg",
  },
  SeedMeal {
    name: "Caesar Salad",
    description: "Crisp romaine lettuce, croutons, parmesan, and Caesar dressing",
    price_cents: 999,
    category: "Salads",
    image_url: "/images/caesar-salad.jpg",
  },
  SeedMeal {
    name: "Grilled Salmon",
    description: "Fresh salmon fillet with herb butter and seasonal vegetables",
    price_cents: 1899,
    category: "Seafood",
    image_url: "/images/salmon.jpg",
  },
  SeedMeal {
    name: "Chicken Alfredo Pasta",
    description: "Creamy alfredo sauce with grilled chicken over fettuccine",
    price_cents: 1550,
    category: "Pasta",
    image_url: "/images/chicken-alfredo.jpg",
  },
];

/// Inserts the initial meal catalog unless meals already exist.
#[instrument(name = "seed_service::seed_meals", skip(pool))]
pub async fn seed_meals(pool: &PgPool) -> Result<()> {
  let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meals")
    .fetch_one(pool)
    .await
    .map_err(|e| {
      error!(error = %e, "Database error while counting meals for seeding.");
      AppError::Sqlx(e)
    })?;

  if existing > 0 {
    info!(existing, "Meal catalog already seeded; skipping.");
    return Ok(());
  }

  for seed in INITIAL_MEALS.iter() {
    sqlx::query(
      "INSERT INTO meals (id, name, description, price_cents, category, image_url, is_available) \
       VALUES ($1, $2, $3, $4, $5, $6, TRUE)",
    )
    .bind(Uuid::new_v4())
    .bind(seed.name)
    .bind(seed.description)
    .bind(seed.price_cents)
    .bind(seed.category)
    .bind(seed.image_url)
    .execute(pool)
    .await
    .map_err(|e| {
      error!(error = %e, meal = seed.name, "Database error while seeding meal.");
      AppError::Sqlx(e)
    })?;
  }

  info!(count = INITIAL_MEALS.len(), "Meal catalog seeded successfully.");
  Ok(())
}
