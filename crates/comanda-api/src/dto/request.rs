//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use comanda_entity::order::OrderStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, max = 128))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Requested role names (`"admin"`, `"personal_cocina"`); anything
    /// else, or omitting the field, grants the base client role.
    pub roles: Option<Vec<String>>,
}

/// Person fields shared by client, kitchen-staff, and courier payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonPayload {
    /// Full name.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Contact email.
    #[validate(email)]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, max = 20))]
    pub phone: String,
    /// Registration date.
    pub registered_on: NaiveDate,
}

/// Create/update payload for a client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientPayload {
    /// Person fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub person: PersonPayload,
    /// Delivery address.
    #[validate(length(min = 1, max = 200))]
    pub address: String,
}

/// Create/update payload for a kitchen staff member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KitchenStaffPayload {
    /// Person fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub person: PersonPayload,
    /// Work shift.
    #[validate(length(min = 1, max = 50))]
    pub shift: String,
    /// Kitchen area assignment.
    #[validate(length(min = 1, max = 100))]
    pub area: String,
}

/// Create/update payload for a courier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CourierPayload {
    /// Person fields.
    #[serde(flatten)]
    #[validate(nested)]
    pub person: PersonPayload,
    /// Delivery zone.
    #[validate(length(min = 1, max = 100))]
    pub zone: String,
}

/// Create/update payload for a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryPayload {
    /// Category name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    /// Owning category.
    pub category_id: i64,
    /// Product name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Preparation time in minutes.
    #[validate(range(min = 0, max = 600))]
    pub prep_minutes: Option<i32>,
    /// Free-form ingredient list.
    pub ingredients: Option<String>,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
}

/// Create payload for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Client placing the order.
    pub client_id: i64,
}

/// Full-field update payload for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    /// Client who placed the order.
    pub client_id: i64,
    /// Date the order was placed.
    pub placed_on: NaiveDate,
    /// Order status.
    pub status: OrderStatus,
}

/// Create/update payload for an order line item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemPayload {
    /// Owning order.
    pub order_id: i64,
    /// Ordered product.
    pub product_id: i64,
    /// Units ordered.
    #[validate(range(min = 1))]
    pub quantity: i32,
    /// Price per unit.
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    /// Special preparation instructions.
    #[validate(length(max = 500))]
    pub special_instructions: Option<String>,
}

/// Create payload for a status-history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangePayload {
    /// Order whose status changed.
    pub order_id: i64,
    /// Status the order entered.
    pub status: OrderStatus,
    /// Client associated with the change.
    pub client_id: Option<i64>,
    /// Kitchen staff member who made the change.
    pub kitchen_staff_id: Option<i64>,
}

/// Create/update payload for a rating.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RatingPayload {
    /// Rated order.
    pub order_id: i64,
    /// Client who rated.
    pub client_id: i64,
    /// Score from 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub score: i32,
    /// Optional comment.
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

/// Create/update payload for a delivery assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentPayload {
    /// Assigned order.
    pub order_id: i64,
    /// Courier carrying the order.
    pub courier_id: i64,
}

/// `?name=` query for catalog searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameQuery {
    /// Substring to search for.
    pub name: String,
}

// ── DTO → entity conversions ─────────────────────────────────

impl From<PersonPayload> for comanda_entity::person::PersonProfile {
    fn from(p: PersonPayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            phone: p.phone,
            registered_on: p.registered_on,
        }
    }
}

impl From<ClientPayload> for comanda_entity::client::NewClient {
    fn from(p: ClientPayload) -> Self {
        Self {
            profile: p.person.into(),
            address: p.address,
        }
    }
}

impl From<KitchenStaffPayload> for comanda_entity::staff::NewKitchenStaff {
    fn from(p: KitchenStaffPayload) -> Self {
        Self {
            profile: p.person.into(),
            shift: p.shift,
            area: p.area,
        }
    }
}

impl From<CourierPayload> for comanda_entity::courier::NewCourier {
    fn from(p: CourierPayload) -> Self {
        Self {
            profile: p.person.into(),
            zone: p.zone,
        }
    }
}

impl From<CategoryPayload> for comanda_entity::category::NewCategory {
    fn from(p: CategoryPayload) -> Self {
        Self {
            name: p.name,
            description: p.description,
        }
    }
}

impl From<ProductPayload> for comanda_entity::product::NewProduct {
    fn from(p: ProductPayload) -> Self {
        Self {
            category_id: p.category_id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_url: p.image_url,
            prep_minutes: p.prep_minutes,
            ingredients: p.ingredients,
            featured: p.featured,
        }
    }
}

impl From<UpdateOrderRequest> for comanda_entity::order::OrderUpdate {
    fn from(p: UpdateOrderRequest) -> Self {
        Self {
            client_id: p.client_id,
            placed_on: p.placed_on,
            status: p.status,
        }
    }
}

impl From<OrderItemPayload> for comanda_entity::order_item::NewOrderItem {
    fn from(p: OrderItemPayload) -> Self {
        Self {
            order_id: p.order_id,
            product_id: p.product_id,
            quantity: p.quantity,
            unit_price: p.unit_price,
            special_instructions: p.special_instructions,
        }
    }
}

impl From<StatusChangePayload> for comanda_entity::history::NewStatusChange {
    fn from(p: StatusChangePayload) -> Self {
        Self {
            order_id: p.order_id,
            status: p.status,
            client_id: p.client_id,
            kitchen_staff_id: p.kitchen_staff_id,
        }
    }
}

impl From<RatingPayload> for comanda_entity::rating::NewRating {
    fn from(p: RatingPayload) -> Self {
        Self {
            order_id: p.order_id,
            client_id: p.client_id,
            score: p.score,
            comment: p.comment,
        }
    }
}

impl From<AssignmentPayload> for comanda_entity::assignment::NewAssignment {
    fn from(p: AssignmentPayload) -> Self {
        Self {
            order_id: p.order_id,
            courier_id: p.courier_id,
        }
    }
}
