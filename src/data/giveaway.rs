use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::giveaway::CreateGiveawayParams;

pub struct GiveawayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a freshly posted giveaway.
    ///
    /// # Arguments
    /// - `params` - Snowflakes, case id, prize and timing of the new giveaway
    ///
    /// # Returns
    /// - `Ok(Model)` - The created giveaway, `completed` false
    /// - `Err(DbErr)` - Database error (including unique violations on
    ///   message id or case id)
    pub async fn create(
        &self,
        params: CreateGiveawayParams,
    ) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(params.message_id.to_string()),
            case_id: ActiveValue::Set(params.case_id),
            channel_id: ActiveValue::Set(params.channel_id.to_string()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            host_id: ActiveValue::Set(params.host_id.to_string()),
            host_name: ActiveValue::Set(params.host_name),
            prize: ActiveValue::Set(params.prize),
            end_time: ActiveValue::Set(params.end_time),
            duration_seconds: ActiveValue::Set(params.duration_seconds),
            completed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a giveaway by its surrogate key.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find_by_id(id).one(self.db).await
    }

    /// Gets a giveaway by the snowflake of its announcement message.
    pub async fn get_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await
    }

    /// Gets a giveaway by its operator-facing case id.
    pub async fn get_by_case_id(
        &self,
        case_id: &str,
    ) -> Result<Option<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::CaseId.eq(case_id))
            .one(self.db)
            .await
    }

    /// Lists all giveaways that have not been finalized yet, soonest-ending
    /// first. Restoration walks this list on boot.
    pub async fn list_incomplete(&self) -> Result<Vec<entity::giveaway::Model>, DbErr> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::Completed.eq(false))
            .order_by_asc(entity::giveaway::Column::EndTime)
            .all(self.db)
            .await
    }

    /// Moves a giveaway's end time. Callers are responsible for only ever
    /// moving it forward.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated giveaway
    /// - `Err(DbErr::RecordNotFound)` - No giveaway with this id exists
    pub async fn set_end_time(
        &self,
        id: i32,
        end_time: DateTime<Utc>,
    ) -> Result<entity::giveaway::Model, DbErr> {
        let Some(record) = self.get_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("giveaway {}", id)));
        };

        let mut active: entity::giveaway::ActiveModel = record.into();
        active.end_time = ActiveValue::Set(end_time);
        active.update(self.db).await
    }

    /// Marks a giveaway as finalized. Safe to call on an already-completed
    /// record.
    pub async fn mark_completed(&self, id: i32) -> Result<entity::giveaway::Model, DbErr> {
        let Some(record) = self.get_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("giveaway {}", id)));
        };

        let mut active: entity::giveaway::ActiveModel = record.into();
        active.completed = ActiveValue::Set(true);
        active.update(self.db).await
    }

    /// Records a participant for a giveaway.
    ///
    /// # Returns
    /// - `Ok(true)` - A new entry row was inserted
    /// - `Ok(false)` - The user already has an entry for this giveaway
    /// - `Err(DbErr)` - Database error
    pub async fn add_entry(&self, giveaway_id: i32, user_id: u64) -> Result<bool, DbErr> {
        let user_id = user_id.to_string();

        let existing = entity::prelude::GiveawayEntry::find()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .filter(entity::giveaway_entry::Column::UserId.eq(user_id.as_str()))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::giveaway_entry::ActiveModel {
            id: ActiveValue::NotSet,
            giveaway_id: ActiveValue::Set(giveaway_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a participant's entry for a giveaway, if present.
    pub async fn remove_entry(&self, giveaway_id: i32, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::GiveawayEntry::delete_many()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .filter(entity::giveaway_entry::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists the user ids entered into a giveaway, oldest entry first.
    pub async fn entries(&self, giveaway_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::GiveawayEntry::find()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .order_by_asc(entity::giveaway_entry::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }
}
