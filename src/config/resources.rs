//! Built-in resource table for the admin API.

use crate::config::{
    Filter, Operation, PagingStyle, RequestShape, ResourceSpec, ResponseShape, UpdateVerb,
};
use crate::mapping::{categories, inventory, products, tables};

const ALL: &[Operation] = &[
    Operation::List,
    Operation::Create,
    Operation::Read,
    Operation::Update,
    Operation::Delete,
];

fn base(name: &'static str, label: &'static str, backend_path: &'static str) -> ResourceSpec {
    ResourceSpec {
        name,
        label,
        backend_path,
        singular: "",
        plural: "",
        object: "",
        backend_list_keys: &[],
        backend_entity_key: "",
        paging: PagingStyle::PageSize,
        default_limit: 10,
        create_status: 200,
        update_verb: UpdateVerb::Post,
        operations: ALL,
        create_body: RequestShape::Passthrough,
        update_body: RequestShape::Passthrough,
        list_item: ResponseShape::Passthrough,
        entity: ResponseShape::Passthrough,
        updated: ResponseShape::Passthrough,
        filters: &[],
        read_params: &[],
    }
}

fn category_detail(category: &serde_json::Value) -> serde_json::Value {
    categories::format(category, Some(1))
}

pub fn default_resources() -> Vec<ResourceSpec> {
    vec![
        ResourceSpec {
            singular: "campaign",
            plural: "campaigns",
            object: "campaign",
            backend_list_keys: &["campaigns"],
            backend_entity_key: "campaign",
            default_limit: 20,
            create_body: RequestShape::Renamed(tables::CAMPAIGN_CREATE),
            update_body: RequestShape::Renamed(tables::CAMPAIGN_UPDATE),
            list_item: ResponseShape::Fields(tables::CAMPAIGN_FIELDS),
            entity: ResponseShape::Fields(tables::CAMPAIGN_FIELDS),
            updated: ResponseShape::Fields(tables::CAMPAIGN_FIELDS),
            ..base("campaigns", "Campaign", "campaigns")
        },
        ResourceSpec {
            singular: "category",
            plural: "categories",
            object: "category",
            backend_list_keys: &["categories"],
            backend_entity_key: "category",
            default_limit: 20,
            operations: &[Operation::List, Operation::Create],
            create_body: RequestShape::Camelize,
            filters: &[
                Filter { admin: &["q", "name"], backend: "name" },
                Filter { admin: &["parentId", "parent_category_id"], backend: "parentId" },
            ],
            ..base("categories", "Category", "categories")
        },
        ResourceSpec {
            singular: "product_category",
            plural: "product_categories",
            object: "product_category",
            backend_list_keys: &["categories", "product_categories"],
            backend_entity_key: "product_category",
            default_limit: 20,
            create_status: 201,
            update_verb: UpdateVerb::Put,
            operations: &[Operation::Read, Operation::Update, Operation::Delete],
            create_body: RequestShape::Custom(categories::create_request),
            update_body: RequestShape::Camelize,
            list_item: ResponseShape::Custom(category_detail),
            entity: ResponseShape::Custom(category_detail),
            updated: ResponseShape::Custom(category_detail),
            filters: &[
                Filter { admin: &["q", "name"], backend: "name" },
                Filter { admin: &["parent_category_id", "parentId"], backend: "parentId" },
            ],
            read_params: &["fields"],
            ..base("product-categories", "Product category", "categories")
        },
        ResourceSpec {
            singular: "collection",
            plural: "collections",
            object: "collection",
            backend_list_keys: &["collections"],
            backend_entity_key: "collection",
            create_status: 201,
            update_verb: UpdateVerb::Put,
            create_body: RequestShape::Renamed(tables::COLLECTION_REQUEST),
            update_body: RequestShape::Renamed(tables::COLLECTION_REQUEST),
            list_item: ResponseShape::Fields(tables::COLLECTION_LIST_FIELDS),
            entity: ResponseShape::Fields(tables::COLLECTION_FIELDS),
            updated: ResponseShape::Fields(tables::COLLECTION_FIELDS),
            ..base("collections", "Collection", "collections")
        },
        ResourceSpec {
            singular: "customer",
            plural: "customers",
            object: "customer",
            backend_list_keys: &["customers"],
            backend_entity_key: "customer",
            create_body: RequestShape::Renamed(tables::CUSTOMER_REQUEST),
            update_body: RequestShape::Renamed(tables::CUSTOMER_REQUEST),
            list_item: ResponseShape::SnakeKeys,
            entity: ResponseShape::SnakeKeys,
            updated: ResponseShape::SnakeKeys,
            ..base("customers", "Customer", "customers")
        },
        ResourceSpec {
            singular: "customer_group",
            plural: "customer_groups",
            object: "customer_group",
            backend_list_keys: &["customer_groups", "groups"],
            backend_entity_key: "customer_group",
            list_item: ResponseShape::SnakeKeys,
            entity: ResponseShape::SnakeKeys,
            updated: ResponseShape::SnakeKeys,
            ..base("customer-groups", "Customer group", "customers/groups")
        },
        ResourceSpec {
            singular: "inventory_item",
            plural: "inventory_items",
            object: "inventory_item",
            backend_list_keys: &["inventory_items", "inventories"],
            backend_entity_key: "inventory_item",
            paging: PagingStyle::OffsetLimit,
            operations: &[Operation::List, Operation::Read, Operation::Update, Operation::Delete],
            create_body: RequestShape::Custom(inventory::create_request),
            list_item: ResponseShape::Custom(inventory::summary),
            entity: ResponseShape::Custom(inventory::detail),
            updated: ResponseShape::Fields(inventory::UPDATE_FIELDS),
            ..base("inventory-items", "Inventory item", "inventories")
        },
        ResourceSpec {
            singular: "product",
            plural: "products",
            object: "product",
            backend_list_keys: &["products"],
            backend_entity_key: "product",
            update_verb: UpdateVerb::Put,
            create_body: RequestShape::Renamed(tables::PRODUCT_REQUEST),
            update_body: RequestShape::Renamed(tables::PRODUCT_REQUEST),
            list_item: ResponseShape::Custom(products::summary),
            entity: ResponseShape::Custom(products::detail),
            updated: ResponseShape::Custom(products::detail),
            filters: &[
                Filter { admin: &["q", "title"], backend: "title" },
                Filter { admin: &["status"], backend: "status" },
            ],
            ..base("products", "Product", "products")
        },
        ResourceSpec {
            singular: "promotion",
            plural: "promotions",
            object: "promotion",
            backend_list_keys: &["promotions"],
            backend_entity_key: "promotion",
            create_body: RequestShape::Renamed(tables::PROMOTION_CREATE),
            update_body: RequestShape::Renamed(tables::PROMOTION_UPDATE),
            list_item: ResponseShape::Fields(tables::PROMOTION_FIELDS),
            entity: ResponseShape::Fields(tables::PROMOTION_FIELDS),
            updated: ResponseShape::Fields(tables::PROMOTION_FIELDS),
            ..base("promotions", "Promotion", "promotions")
        },
        ResourceSpec {
            singular: "reservation",
            plural: "reservations",
            object: "reservation",
            backend_list_keys: &["reservations"],
            backend_entity_key: "reservation",
            paging: PagingStyle::OffsetLimit,
            update_body: RequestShape::Renamed(tables::RESERVATION_UPDATE),
            list_item: ResponseShape::Fields(tables::RESERVATION_FIELDS),
            entity: ResponseShape::Fields(tables::RESERVATION_FIELDS),
            updated: ResponseShape::Fields(tables::RESERVATION_FIELDS),
            ..base("reservations", "Reservation", "reservations")
        },
        ResourceSpec {
            singular: "stock_location",
            plural: "stock_locations",
            object: "stock_location",
            backend_list_keys: &["stock_locations", "locations"],
            backend_entity_key: "stock_location",
            paging: PagingStyle::OffsetLimit,
            list_item: ResponseShape::Fields(tables::STOCK_LOCATION_FIELDS),
            entity: ResponseShape::Fields(tables::STOCK_LOCATION_FIELDS),
            updated: ResponseShape::Fields(tables::STOCK_LOCATION_FIELDS),
            ..base("stock-locations", "Stock location", "stock-locations")
        },
    ]
}
