use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice_line_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub invoice_id: i32,
    #[sea_orm(nullable)]
    pub service_operation_id: Option<i32>,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id"
    )]
    Invoice,
    #[sea_orm(
        belongs_to = "super::service_operation::Entity",
        from = "Column::ServiceOperationId",
        to = "super::service_operation::Column::Id"
    )]
    ServiceOperation,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl Related<super::service_operation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceOperation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
