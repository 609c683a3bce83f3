use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级墙帖子表
        manager
            .create_table(
                Table::create()
                    .table(WallPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WallPosts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WallPosts::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(WallPosts::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(WallPosts::AuthorRole).string().not_null())
                    .col(ColumnDef::new(WallPosts::Content).text().not_null())
                    .col(ColumnDef::new(WallPosts::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建帖子评论表
        manager
            .create_table(
                Table::create()
                    .table(WallPostComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WallPostComments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WallPostComments::PostId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WallPostComments::AuthorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WallPostComments::AuthorRole)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WallPostComments::Content).text().not_null())
                    .col(
                        ColumnDef::new(WallPostComments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WallPostComments::Table, WallPostComments::PostId)
                            .to(WallPosts::Table, WallPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建禁言表
        manager
            .create_table(
                Table::create()
                    .table(MutedStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MutedStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MutedStudents::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MutedStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MutedStudents::MutedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MutedStudents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_wall_posts_class_id")
                    .table(WallPosts::Table)
                    .col(WallPosts::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_wall_post_comments_post_id")
                    .table(WallPostComments::Table)
                    .col(WallPostComments::PostId)
                    .to_owned(),
            )
            .await?;

        // 同一班级同一学生只有一条禁言记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_muted_students_unique")
                    .table(MutedStudents::Table)
                    .col(MutedStudents::ClassId)
                    .col(MutedStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MutedStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WallPostComments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WallPosts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum WallPosts {
    #[sea_orm(iden = "wall_posts")]
    Table,
    Id,
    ClassId,
    AuthorId,
    AuthorRole,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum WallPostComments {
    #[sea_orm(iden = "wall_post_comments")]
    Table,
    Id,
    PostId,
    AuthorId,
    AuthorRole,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MutedStudents {
    #[sea_orm(iden = "muted_students")]
    Table,
    Id,
    ClassId,
    StudentId,
    MutedBy,
    CreatedAt,
}
