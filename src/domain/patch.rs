// ==========================================
// VMQ 生产看板 - 部分更新 (Patch)
// ==========================================
// 职责: 为每个实体生成 "全部字段 Option 化" 的补丁结构体
// 规则: Some 覆盖，None 保留原值（浅合并）
// ==========================================

/// 定义实体补丁结构体及其 `apply_to`
macro_rules! record_patch {
    (
        $(#[$meta:meta])*
        $patch:ident for $record:ty {
            $($field:ident: $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $(pub $field: Option<$ty>,)*
        }

        impl $patch {
            /// 将非空字段合并进记录
            pub fn apply_to(self, record: &mut $record) {
                $(
                    if let Some(value) = self.$field {
                        record.$field = value;
                    }
                )*
            }

            /// 补丁是否不含任何字段
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}
