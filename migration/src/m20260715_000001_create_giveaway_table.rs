use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(string_uniq(Giveaway::MessageId))
                    .col(string_uniq(Giveaway::CaseId))
                    .col(string(Giveaway::ChannelId))
                    .col(string(Giveaway::GuildId))
                    .col(string(Giveaway::HostId))
                    .col(string(Giveaway::HostName))
                    .col(string(Giveaway::Prize))
                    .col(timestamp(Giveaway::EndTime))
                    .col(big_integer(Giveaway::DurationSeconds))
                    .col(boolean(Giveaway::Completed).default(false))
                    .col(
                        timestamp(Giveaway::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Giveaway {
    Table,
    Id,
    MessageId,
    CaseId,
    ChannelId,
    GuildId,
    HostId,
    HostName,
    Prize,
    EndTime,
    DurationSeconds,
    Completed,
    CreatedAt,
}
