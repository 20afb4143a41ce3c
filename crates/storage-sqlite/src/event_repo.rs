//! One repository implementation stamped out per event table.
//!
//! Every event table shares the `id`, `baby_id`, and `event_time` columns,
//! so the whole `EventRepositoryTrait` surface can be generated from the
//! table name and the row/domain type pair.

/// Generates an event repository struct and its `EventRepositoryTrait` impl.
///
/// Requires `From<$row> for $record`, `From<$record> for $row`, and
/// `From<$new_record> for $new_row` conversions, plus an `id: Option<String>`
/// field on `$new_row`.
#[macro_export]
macro_rules! event_repository {
    ($repo:ident, $table:ident, $row:ty, $new_row:ty, $record:ty, $new_record:ty) => {
        pub struct $repo {
            pool: std::sync::Arc<$crate::db::DbPool>,
        }

        impl $repo {
            pub fn new(pool: std::sync::Arc<$crate::db::DbPool>) -> Self {
                Self { pool }
            }
        }

        impl nestling_core::events::EventRepositoryTrait<$record, $new_record> for $repo {
            fn insert(
                &self,
                new_record: $new_record,
            ) -> nestling_core::Result<$record> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                let mut row: $new_row = new_record.into();
                if row.id.is_none() {
                    row.id = Some(uuid::Uuid::new_v4().to_string());
                }
                let inserted = diesel::insert_into($table::table)
                    .values(&row)
                    .returning(<$row>::as_returning())
                    .get_result::<$row>(&mut conn)
                    .map_err($crate::errors::StorageError::from)?;
                Ok(inserted.into())
            }

            fn get(&self, record_id: &str) -> nestling_core::Result<Option<$record>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                let found = $table::table
                    .find(record_id)
                    .first::<$row>(&mut conn)
                    .optional()
                    .map_err($crate::errors::StorageError::from)?;
                Ok(found.map(Into::into))
            }

            fn list_for_baby(
                &self,
                baby: &str,
                limit: Option<i64>,
            ) -> nestling_core::Result<Vec<$record>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                let mut query = $table::table
                    .filter($table::baby_id.eq(baby))
                    .order($table::event_time.desc())
                    .into_boxed();
                if let Some(limit) = limit {
                    query = query.limit(limit);
                }
                let rows = query
                    .load::<$row>(&mut conn)
                    .map_err($crate::errors::StorageError::from)?;
                Ok(rows.into_iter().map(Into::into).collect())
            }

            fn list_in_window(
                &self,
                baby: &str,
                window: &nestling_core::utils::TimeWindow,
            ) -> nestling_core::Result<Vec<$record>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                let rows = $table::table
                    .filter($table::baby_id.eq(baby))
                    .filter($table::event_time.ge($crate::utils::epoch_secs(window.start)))
                    .filter($table::event_time.lt($crate::utils::epoch_secs(window.end)))
                    .order($table::event_time.asc())
                    .load::<$row>(&mut conn)
                    .map_err($crate::errors::StorageError::from)?;
                Ok(rows.into_iter().map(Into::into).collect())
            }

            fn count_in_window(
                &self,
                baby: &str,
                window: &nestling_core::utils::TimeWindow,
            ) -> nestling_core::Result<i64> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                $table::table
                    .filter($table::baby_id.eq(baby))
                    .filter($table::event_time.ge($crate::utils::epoch_secs(window.start)))
                    .filter($table::event_time.lt($crate::utils::epoch_secs(window.end)))
                    .count()
                    .get_result(&mut conn)
                    .map_err(|e| $crate::errors::StorageError::from(e).into())
            }

            fn latest_for_baby(&self, baby: &str) -> nestling_core::Result<Option<$record>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                let found = $table::table
                    .filter($table::baby_id.eq(baby))
                    .order($table::event_time.desc())
                    .first::<$row>(&mut conn)
                    .optional()
                    .map_err($crate::errors::StorageError::from)?;
                Ok(found.map(Into::into))
            }

            fn update(&self, record: $record) -> nestling_core::Result<$record> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                let row: $row = record.into();
                let record_id = row.id.clone();
                let affected = diesel::update($table::table.find(&record_id))
                    .set(&row)
                    .execute(&mut conn)
                    .map_err($crate::errors::StorageError::from)?;
                if affected == 0 {
                    return Err(
                        nestling_core::errors::DatabaseError::NotFound(record_id).into()
                    );
                }
                let reloaded = $table::table
                    .find(&record_id)
                    .first::<$row>(&mut conn)
                    .map_err($crate::errors::StorageError::from)?;
                Ok(reloaded.into())
            }

            fn delete(&self, record_id: &str) -> nestling_core::Result<usize> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = $crate::db::get_connection(&self.pool)?;
                diesel::delete($table::table.find(record_id))
                    .execute(&mut conn)
                    .map_err(|e| $crate::errors::StorageError::from(e).into())
            }
        }
    };
}
