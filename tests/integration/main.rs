// 統合テスト - ビルド済みバイナリを実行して検証

mod test_main_entry_point;
